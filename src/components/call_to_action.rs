// src/components/call_to_action.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config;

/// The two ways out of the call-to-action block.
#[derive(Debug, Clone, PartialEq)]
pub struct CtaActions {
    pub contact: Route,
    pub phone_href: String,
    pub phone_label: &'static str,
}

pub fn actions() -> CtaActions {
    CtaActions {
        contact: Route::Contact,
        phone_href: config::tel_href(),
        phone_label: config::PHONE_DISPLAY,
    }
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let CtaActions {
        contact,
        phone_href,
        phone_label,
    } = actions();

    html! {
      <section class="cta" aria-labelledby="cta-title">
        <div class="cta-inner">
          <h2 id="cta-title" class="cta-title">{ "Come and see us in action" }</h2>
          <p class="cta-sub">
            { "Book a visit to meet our educators, tour the rooms and see a morning of play for yourself." }
          </p>
          <div class="row">
            <Link<Route> to={contact} classes={classes!("btn")}>
              { "Schedule a Visit" }
            </Link<Route>>
            <a class="btn btn2" href={phone_href}>
              { format!("Call {phone_label}") }
            </a>
          </div>
        </div>
      </section>
    }
}
