use gloo::console;
use yew::prelude::*;

use crate::resources::CATALOG;

#[derive(Properties, PartialEq)]
pub struct ResourceAccessProps {
    pub email: String,
    pub on_start_over: Callback<()>,
}

const NEXT_STEPS: &[(&str, &str)] = &[
    ("Monthly Updates", "Get fresh market insights and new listings delivered monthly"),
    ("Exclusive Access", "First access to off-market deals and pre-construction opportunities"),
    ("Expert Support", "Direct access to our team of real estate professionals"),
];

#[function_component(ResourceAccess)]
pub fn resource_access(props: &ResourceAccessProps) -> Html {
    let downloads = CATALOG.iter().map(|r| {
        // No files behind these yet.
        let on_download = {
            let title = r.title;
            Callback::from(move |_: MouseEvent| console::log!(format!("Downloading: {title}")))
        };
        html! {
            <div class="card download" key={r.category.slug()}>
              <div class="card-h">
                <h3 class="card-t">{ r.title }</h3>
                <p class="card-p">{ r.library_blurb }</p>
                <p class="small">{ r.file_size }</p>
              </div>
              <div class="card-b">
                <button class="cta wide" onclick={on_download}>{ "Download Now" }</button>
              </div>
            </div>
        }
    });

    let on_portal = Callback::from(|_: MouseEvent| console::log!("property portal requested"));

    let on_start_over = {
        let cb = props.on_start_over.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="section">
          <div class="wrap">
            <div class="section-head">
              <div class="badge good">{ "Verified" }</div>
              <h1 class="h1">{ "Welcome to Your" }<span class="accent">{ " Resource Library" }</span></h1>
              <p class="sub">
                { "Congratulations! Your email " }
                <strong>{ props.email.clone() }</strong>
                { " has been verified. You now have access to all our premium resources." }
              </p>
            </div>

            <div class="grid two">{ for downloads }</div>

            <div class="card">
              <div class="card-h center">
                <h2 class="card-t">{ "What's Next?" }</h2>
                <p class="card-p">{ "You're now part of our exclusive community of successful home buyers" }</p>
              </div>
              <div class="card-b grid three center">
                { for NEXT_STEPS.iter().map(|(title, body)| html!{
                    <div>
                      <h3>{ *title }</h3>
                      <p class="small">{ *body }</p>
                    </div>
                })}
              </div>
            </div>

            <div class="section-foot">
              <p class="small">{ "Bookmark this page for easy access to your resources." }</p>
              <div class="btnRow center">
                <button class="primary lg" onclick={on_portal}>{ "Access Property Portal" }</button>
                <button class="ghost lg" onclick={on_start_over}>{ "Start over" }</button>
              </div>
            </div>
          </div>
        </section>
    }
}
