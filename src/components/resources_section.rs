use yew::prelude::*;

use crate::resources::{ResourceCategory, CATALOG};

#[derive(Properties, PartialEq)]
pub struct ResourcesSectionProps {
    pub on_get_resource: Callback<ResourceCategory>,
}

#[function_component(ResourcesSection)]
pub fn resources_section(props: &ResourcesSectionProps) -> Html {
    let cards = CATALOG.iter().map(|r| {
        let onclick = {
            let cb = props.on_get_resource.clone();
            let category = r.category;
            Callback::from(move |_: MouseEvent| cb.emit(category))
        };
        html! {
            <div class="card resource" key={r.category.slug()}>
              <div class="card-h">
                <h3 class="card-t">{ r.title }</h3>
                <p class="card-p">{ r.teaser }</p>
              </div>
              <div class="card-b">
                <ul class="features">
                  { for r.features.iter().map(|f| html!{ <li><span class="dot good"></span>{ *f }</li> }) }
                </ul>
                <button class="cta wide" {onclick}>{ "Get Free Access" }</button>
              </div>
            </div>
        }
    });

    let on_all = {
        let cb = props.on_get_resource.clone();
        Callback::from(move |_: MouseEvent| cb.emit(ResourceCategory::All))
    };

    html! {
        <section id="resources" class="section muted">
          <div class="wrap">
            <div class="section-head">
              <h2 class="h2">{ "Unlock Your" }<span class="accent">{ " Free Resources" }</span></h2>
              <p class="sub">
                { "Get instant access to our exclusive collection of tools, guides, and insights \
                   that have helped over 1,000 buyers find their perfect homes." }
              </p>
            </div>

            <div class="grid four">{ for cards }</div>

            <div class="section-foot">
              <p class="small">{ "Join thousands of successful home buyers who used our resources to save money and time." }</p>
              <button class="primary lg" onclick={on_all}>{ "Get All Resources Free" }</button>
            </div>
          </div>
        </section>
    }
}
