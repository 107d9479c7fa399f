// src/pages/home.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::{ActivityCards, CallToAction};
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();
    let empty = catalog.is_empty();

    html! {
      <>
        <section class="hero">
          <div class="badge">{ "Now enrolling" }</div>
          <h1 class="h1">{ config::SITE_NAME }</h1>
          <p class="sub">{ config::TAGLINE }</p>
        </section>

        <section id="activities">
          <h2 class="section-t">{ "Our Activities" }</h2>
          <p class="card-p">{ "Every day mixes creativity, movement, discovery and time with friends." }</p>
          if empty {
            <p class="card-p">{ "New programmes are on their way." }</p>
          }
          <ActivityCards {catalog} />
        </section>

        <CallToAction />
      </>
    }
}
