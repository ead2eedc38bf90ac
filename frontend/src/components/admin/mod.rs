//! Admin dashboard: partner, associate and consumer listings with search,
//! headline statistics, a generic detail view and a document viewer.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::admin::EntityKind;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AdminDashboardProps;
pub use state::AdminDashboard;

use crate::helpers::get_json;

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = AdminDashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminDashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Reload);
        }
    }
}

/// Fetches one listing and reports it back as `Msg::Loaded`.
pub(crate) fn load_listing(ctx: &Context<AdminDashboard>, kind: EntityKind) {
    let url = kind.endpoint().url(&ctx.props().config);
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = get_json(&url).await;
        link.send_message(Msg::Loaded(kind, result));
    });
}
