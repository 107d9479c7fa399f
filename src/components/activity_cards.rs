// src/components/activity_cards.rs
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::catalog::{Activity, Catalog};

/// Everything one card shows, taken verbatim from its `Activity`.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFragment {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub details: String,
    // color / iconColor pass straight through as CSS classes
    pub surface_class: String,
    pub icon_class: String,
    pub link: Route,
}

impl From<&Activity> for CardFragment {
    fn from(a: &Activity) -> Self {
        Self {
            key: a.id.clone(),
            title: a.title.clone(),
            description: a.description.clone(),
            image: a.image.clone(),
            tags: a.tags.clone(),
            details: a.details.clone(),
            surface_class: a.color.clone(),
            icon_class: a.icon_color.clone(),
            link: Route::Activity { id: a.id.clone() },
        }
    }
}

/// One fragment per activity, in catalog order.
pub fn project(activities: &[Activity]) -> Vec<CardFragment> {
    activities.iter().map(CardFragment::from).collect()
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardsProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(ActivityCards)]
pub fn activity_cards(props: &ActivityCardsProps) -> Html {
    let cards = project(props.catalog.as_slice());

    html! {
      <div class="activity-grid">
        { for cards.into_iter().map(|card| {
            let key = card.key.clone();
            html! { <ActivityCard key={key} card={card} /> }
        }) }
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: CardFragment,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    html! {
      <article class={format!("card activity-card {}", card.surface_class)}>
        <img class="activity-img" src={card.image.clone()} alt={card.title.clone()} loading="lazy" />
        <div class="card-b">
          <div class="activity-head">
            <span class={format!("activity-icon {}", card.icon_class)} aria-hidden="true">{ "✦" }</span>
            <h3 class="card-t">{ card.title.clone() }</h3>
          </div>
          <p class="card-p">{ card.description.clone() }</p>

          <ul class="tags">
            { for card.tags.iter().map(|t| html! { <li class="tag">{ t.clone() }</li> }) }
          </ul>

          // native disclosure, so the card itself stays stateless
          <details class="activity-more">
            <summary>{ "More about this" }</summary>
            <p>{ card.details.clone() }</p>
          </details>

          <Link<Route> to={card.link.clone()} classes={classes!("chip")}>
            { "See the full programme →" }
          </Link<Route>>
        </div>
      </article>
    }
}
