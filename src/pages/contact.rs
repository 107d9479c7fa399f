// src/pages/contact.rs
use yew::prelude::*;

use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
      <section class="grid">
        <div class="card">
          <div class="card-h">
            <h1 class="card-t">{ "Visit or call us" }</h1>
            <p class="card-p">{ "Tours run every weekday morning. Give us a ring and we'll find a time that suits." }</p>
          </div>
          <div class="card-b">
            <div class="kv">
              <div class="k">
                <div class="label">{ "Phone" }</div>
                <div class="value"><a href={config::tel_href()}>{ config::PHONE_DISPLAY }</a></div>
              </div>
              <div class="k">
                <div class="label">{ "Email" }</div>
                <div class="value"><a href={format!("mailto:{}", config::EMAIL)}>{ config::EMAIL }</a></div>
              </div>
              <div class="k">
                <div class="label">{ "Address" }</div>
                <div class="value">
                  { for config::ADDRESS_LINES.iter().map(|l| html! { <div>{ *l }</div> }) }
                </div>
              </div>
            </div>
          </div>
        </div>

        <div class="card">
          <div class="card-h">
            <h2 class="card-t">{ "Opening hours" }</h2>
          </div>
          <div class="card-b">
            <div class="kv">
              { for config::OPENING_HOURS.iter().map(|h| html! {
                <div class="k">
                  <div class="label">{ h.days }</div>
                  <div class="value">{ h.hours }</div>
                </div>
              }) }
            </div>
          </div>
        </div>
      </section>
    }
}
