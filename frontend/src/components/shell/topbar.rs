use super::ShellProps;
use yew::prelude::*;

pub struct Topbar;

impl Component for Topbar {
    type Message = ();
    type Properties = ShellProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Topbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let location = &ctx.props().location;
        let crumbs = location.breadcrumbs();
        let last = crumbs.len().saturating_sub(1);

        html! {
            <header class="topbar">
                <nav class="breadcrumb">
                    { for crumbs.into_iter().enumerate().map(|(i, crumb)| html! {
                        <>
                            {
                                match crumb.href {
                                    Some(href) => html! { <a {href}>{crumb.label}</a> },
                                    None => html! { <span>{crumb.label}</span> },
                                }
                            }
                            if i < last { <span class="separator">{"/"}</span> }
                        </>
                    }) }
                </nav>
                {
                    match (location.toggle_mode_route(), location.mode) {
                        (Some(route), Some(mode)) => html! {
                            <div class="mode-toggle">
                                <span class="mode active">{mode.label()}</span>
                                <a class="mode" href={route}>{mode.toggled().label()}</a>
                            </div>
                        },
                        _ => html! {},
                    }
                }
            </header>
        }
    }
}
