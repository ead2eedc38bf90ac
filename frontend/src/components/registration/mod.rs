//! Energy-partner registration page.
//!
//! The component is a thin shell around `common::form::FormSession`: every
//! input event becomes a `Msg`, the session applies it, and the view reads
//! the record, the error set and the substation cascade back out of it.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PartnerRegistrationProps;
pub use state::PartnerRegistration;

impl Component for PartnerRegistration {
    type Message = Msg;
    type Properties = PartnerRegistrationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PartnerRegistration::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
