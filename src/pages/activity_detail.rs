// src/pages/activity_detail.rs
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::catalog::Catalog;
use crate::components::CallToAction;
use crate::pages::NotFound;

#[derive(Properties, PartialEq)]
pub struct ActivityDetailProps {
    pub id: String,
}

#[function_component(ActivityDetail)]
pub fn activity_detail(props: &ActivityDetailProps) -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();

    // The catalog only enumerates; finding one entry is this page's job.
    let Some(a) = catalog.iter().find(|a| a.id == props.id) else {
        return html! { <NotFound /> };
    };

    html! {
      <>
        <article class={format!("card activity-page {}", a.color)}>
          <img class="activity-hero" src={a.image.clone()} alt={a.title.clone()} />
          <div class="card-h">
            <h1 class="h1">{ a.title.clone() }</h1>
            <p class="sub">{ a.description.clone() }</p>
            <ul class="tags">
              { for a.tags.iter().map(|t| html! { <li class="tag">{ t.clone() }</li> }) }
            </ul>
          </div>
          <div class="card-b">
            <p class="card-p">{ a.details.clone() }</p>
            <Link<Route> to={Route::Home} classes={classes!("chip")}>{ "← All activities" }</Link<Route>>
          </div>
        </article>

        <CallToAction />
      </>
    }
}
