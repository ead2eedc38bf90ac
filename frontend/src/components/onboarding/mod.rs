//! Associate dashboard: onboarding consumers against the contract capacity.
//!
//! The signed-in associate is read from the session store. Its profile is
//! fetched once to learn which consumers are already onboarded.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::OnboardingProps;
pub use state::OnboardingPage;

impl Component for OnboardingPage {
    type Message = Msg;
    type Properties = OnboardingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        OnboardingPage::from_session()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::LoadProfile);
        }
    }
}
