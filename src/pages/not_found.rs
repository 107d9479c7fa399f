use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
      <section class="card">
        <div class="card-h">
          <h1 class="card-t">{ "Page not found" }</h1>
          <p class="card-p">{ "We couldn't find that page." }</p>
        </div>
        <div class="card-b">
          <Link<Route> to={Route::Home} classes={classes!("btn")}>{ "Back to home" }</Link<Route>>
        </div>
      </section>
    }
}
