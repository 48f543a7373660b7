use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_get_started: Callback<()>,
}

const TRUST: &[&str] = &["No Fees or Obligations", "Instant Access", "1000+ Satisfied Buyers"];

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let on_create = {
        let cb = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="hero">
          <div class="hero-overlay" aria-hidden="true"></div>
          <div class="wrap hero-content">
            <h1 class="h1">
              { "Can I Buy A Home" }
              <span class="accent block">{ "In Ontario?" }</span>
            </h1>
            <p class="sub">
              { "Get your personalized home buying assessment and discover exclusive Ontario properties with \
                 insider market insights. Our verified process has helped 1,000+ buyers secure their dream homes." }
            </p>

            <div class="btnRow center">
              <button class="primary lg" onclick={on_create}>{ "Create Account" }</button>
              // Jumps to the catalog below; no wizard event.
              <a class="btn ghost lg" href="#resources">{ "View Latest Listings" }</a>
            </div>

            <div class="trust">
              { for TRUST.iter().map(|t| html!{
                  <div class="trust-item"><span class="dot good"></span>{ *t }</div>
              })}
            </div>
          </div>
        </section>
    }
}
