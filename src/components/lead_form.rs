use gloo::console;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::FlowConfig;
use crate::lead::{LeadForm, LeadFormErrors};
use crate::resources::ResourceCategory;
use crate::services::submit_lead;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub resource_category: ResourceCategory,
    pub config: FlowConfig,
    /// Fires with the submitted email once the simulated send completes.
    pub on_success: Callback<String>,
}

#[function_component(LeadFormSection)]
pub fn lead_form_section(props: &LeadFormProps) -> Html {
    let form = use_state(LeadForm::default);
    let errors = use_state(LeadFormErrors::default);
    let submitting = use_state(|| false);
    let status = use_state(|| None::<String>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(LeadForm { full_name: v, ..(*form).clone() });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(LeadForm { email: v, ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let status = status.clone();
        let on_success = props.on_success.clone();
        let delay_ms = props.config.submit_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            status.set(None);

            let lead = match form.validate() {
                Ok(lead) => lead,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(LeadFormErrors::default());
            submitting.set(true);

            let submitting = submitting.clone();
            let status = status.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match submit_lead(lead, delay_ms).await {
                    Ok(email) => {
                        submitting.set(false);
                        on_success.emit(email);
                    }
                    Err(err) => {
                        console::error!(format!("lead submit failed: {err}"));
                        status.set(Some(err.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let field_class = |failed: bool| classes!("input", failed.then_some("invalid"));

    html! {
        <section class="section">
          <div class="wrap narrow">
            <div class="card form-card">
              <div class="card-h center">
                <h2 class="card-t lg">{ "Create Your Account" }</h2>
                <p class="card-p">{ "Enter your details to access your Ontario home buying dashboard." }</p>
                <div class="pill">{ format!("Requesting: {}", props.resource_category.form_title()) }</div>
              </div>

              <form class="card-b stack" onsubmit={on_submit} novalidate={true}>
                <div class="field">
                  <label for="fullName">{ "Full Name *" }</label>
                  <input
                    id="fullName"
                    type="text"
                    class={field_class(errors.full_name.is_some())}
                    placeholder="Enter your full name"
                    value={form.full_name.clone()}
                    oninput={on_name}
                  />
                  if let Some(err) = errors.full_name {
                    <p class="error">{ err.to_string() }</p>
                  }
                </div>

                <div class="field">
                  <label for="email">{ "Email Address *" }</label>
                  <input
                    id="email"
                    type="email"
                    class={field_class(errors.email.is_some())}
                    placeholder="Enter your email address"
                    value={form.email.clone()}
                    oninput={on_email}
                  />
                  if let Some(err) = errors.email {
                    <p class="error">{ err.to_string() }</p>
                  }
                  <p class="small">{ "We'll send you a verification email before granting access." }</p>
                </div>

                <button type="submit" class="primary lg wide" disabled={*submitting}>
                  { if *submitting { "Sending Verification..." } else { "Create Account & Verify Email" } }
                </button>

                if let Some(msg) = (*status).clone() {
                  <p class="error center">{ msg }</p>
                }
              </form>

              <div class="card-f">
                <div class="pills">
                  <div class="pill"><span class="dot good"></span>{ "Email Verification Required" }</div>
                  <div class="pill"><span class="dot good"></span>{ "Secure Account Access" }</div>
                </div>
                <p class="small center">{ "We'll send a verification code to your email to confirm your account." }</p>
              </div>
            </div>
          </div>
        </section>
    }
}
