// src/app.rs
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::components::{SiteFooter, SiteHeader};
use crate::pages::{ActivityDetail, Contact, Home, NotFound};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/activities/:id")]
    Activity { id: String },
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Activity { id } => html! { <ActivityDetail {id} /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
      <ContextProvider<Rc<Catalog>> context={props.catalog.clone()}>
        <BrowserRouter>
          <div class="bg" aria-hidden="true"></div>
          <div class="wrap">
            <SiteHeader />
            <main>
              <Switch<Route> render={switch} />
            </main>
            <SiteFooter />
          </div>
        </BrowserRouter>
      </ContextProvider<Rc<Catalog>>>
    }
}
