use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Narrowest a card may get before the grid wraps, in pixels.
    #[prop_or(280)]
    pub min_card_width: u32,
    #[prop_or(16)]
    pub gap: u32,
    pub children: Children,
}

/// Responsive grid of cards.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: {}px;
             width: 100%;",
            props.min_card_width, props.gap
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
