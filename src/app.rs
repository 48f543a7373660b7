use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{
    EmailVerification, HeroSection, LeadFormSection, ResourceAccess, ResourcesSection,
};
use crate::config::FlowConfig;
use crate::resources::ResourceCategory;
use crate::wizard::{Step, WizardEvent, WizardState};

#[function_component(App)]
pub fn app() -> Html {
    let wizard = use_reducer(WizardState::new);
    let config = use_state(FlowConfig::default);

    // Load flow-config.json once; defaults stay in place if it is missing.
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match FlowConfig::fetch().await {
                    Ok(c) => {
                        console::log!("flow config loaded");
                        config.set(c);
                    }
                    Err(e) => console::warn!(format!("{e}; using defaults")),
                }
            });
            || ()
        });
    }

    let send = |event: WizardEvent| {
        let wizard = wizard.clone();
        Callback::from(move |_: ()| wizard.dispatch(event.clone()))
    };

    let on_get_resource = {
        let wizard = wizard.clone();
        Callback::from(move |c: ResourceCategory| wizard.dispatch(WizardEvent::ResourceSelected(c)))
    };

    let on_form_success = {
        let wizard = wizard.clone();
        Callback::from(move |email: String| wizard.dispatch(WizardEvent::FormSubmitted(email)))
    };

    let body = match wizard.step {
        Step::Hero => html! {
            <>
              <HeroSection on_get_started={send(WizardEvent::Start)} />
              <ResourcesSection {on_get_resource} />
            </>
        },
        Step::Form => html! {
            <LeadFormSection
                resource_category={wizard.resource_category}
                config={(*config).clone()}
                on_success={on_form_success}
            />
        },
        Step::Verification => html! {
            <EmailVerification
                email={wizard.email.clone()}
                config={(*config).clone()}
                on_verified={send(WizardEvent::EmailVerified)}
                on_back={send(WizardEvent::Back)}
            />
        },
        Step::Access => html! {
            <ResourceAccess
                email={wizard.email.clone()}
                on_start_over={send(WizardEvent::Restart)}
            />
        },
    };

    html! {
        <main class="page">{ body }</main>
    }
}
