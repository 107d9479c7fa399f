// src/components/layout.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
      <header class="site-header">
        <Link<Route> to={Route::Home} classes={classes!("brand")}>
          { config::SITE_NAME }
        </Link<Route>>
        <nav class="nav" aria-label="Main">
          <a class="chip" href="/#activities">{ "Activities" }</a>
          <Link<Route> to={Route::Contact} classes={classes!("chip")}>{ "Contact" }</Link<Route>>
        </nav>
      </header>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
      <footer class="footer">
        <div>
          <strong>{ config::SITE_NAME }</strong>
          { for config::ADDRESS_LINES.iter().map(|l| html! { <div>{ *l }</div> }) }
        </div>
        <div>
          <a href={config::tel_href()}>{ config::PHONE_DISPLAY }</a>
          <div><a href={format!("mailto:{}", config::EMAIL)}>{ config::EMAIL }</a></div>
        </div>
      </footer>
    }
}
