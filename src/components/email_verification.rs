use gloo::console;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::FlowConfig;
use crate::services::{resend_code, verify_code};
use crate::verification::{sanitize_code_input, CountdownAction, ResendCountdown};

#[derive(Properties, PartialEq)]
pub struct EmailVerificationProps {
    pub email: String,
    pub config: FlowConfig,
    pub on_verified: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(EmailVerification)]
pub fn email_verification(props: &EmailVerificationProps) -> Html {
    let code = use_state(String::new);
    let verifying = use_state(|| false);
    let resending = use_state(|| false);
    let status = use_state(|| None::<String>);

    let cooldown = props.config.resend_cooldown_secs;
    let countdown = use_reducer(move || ResendCountdown::new(cooldown));

    // One tick per second for as long as this view is mounted.
    {
        let dispatcher = countdown.dispatcher();
        use_effect_with((), move |_| {
            let handle = Interval::new(1000, move || dispatcher.dispatch(CountdownAction::Tick));
            move || drop(handle)
        });
    }

    let code_length = props.config.code_length;

    let on_code = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            code.set(sanitize_code_input(&raw, code_length));
        })
    };

    let on_verify = {
        let code = code.clone();
        let verifying = verifying.clone();
        let status = status.clone();
        let on_verified = props.on_verified.clone();
        let delay_ms = props.config.verify_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *verifying {
                return;
            }
            verifying.set(true);
            status.set(None);

            let entered = (*code).clone();
            let verifying = verifying.clone();
            let status = status.clone();
            let on_verified = on_verified.clone();
            spawn_local(async move {
                match verify_code(entered, code_length, delay_ms).await {
                    Ok(()) => {
                        verifying.set(false);
                        on_verified.emit(());
                    }
                    Err(err) => {
                        console::warn!(format!("verification failed: {err}"));
                        status.set(Some(err.to_string()));
                        verifying.set(false);
                    }
                }
            });
        })
    };

    let on_resend = {
        let countdown = countdown.clone();
        let resending = resending.clone();
        let status = status.clone();
        let delay_ms = props.config.resend_delay_ms;
        Callback::from(move |_: MouseEvent| {
            if *resending || !countdown.can_resend() {
                return;
            }
            countdown.dispatch(CountdownAction::Resend);
            resending.set(true);
            status.set(None);

            let resending = resending.clone();
            let status = status.clone();
            spawn_local(async move {
                if let Err(err) = resend_code(delay_ms).await {
                    console::error!(format!("resend failed: {err}"));
                    status.set(Some(err.to_string()));
                }
                resending.set(false);
            });
        })
    };

    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let can_submit = code.len() == code_length && !*verifying;

    html! {
        <section class="section">
          <div class="wrap narrow">
            <div class="card form-card">
              <div class="card-h center">
                <h2 class="card-t lg">{ "Verify Your Email" }</h2>
                <p class="card-p">
                  { format!("We've sent a {code_length}-digit verification code to:") }
                  <br />
                  <strong>{ props.email.clone() }</strong>
                </p>
              </div>

              <form class="card-b stack" onsubmit={on_verify}>
                <div class="field">
                  <label for="otp">{ "Verification Code" }</label>
                  <input
                    id="otp"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    class="input code"
                    placeholder={format!("Enter {code_length}-digit code")}
                    maxlength={code_length.to_string()}
                    value={(*code).clone()}
                    oninput={on_code}
                  />
                  <p class="small">{ "Please check your email (including spam folder) for the verification code." }</p>
                </div>

                <button type="submit" class="primary lg wide" disabled={!can_submit}>
                  { if *verifying { "Verifying..." } else { "Verify & Access Resources" } }
                </button>

                if let Some(msg) = (*status).clone() {
                  <p class="error center">{ msg }</p>
                }
              </form>

              <div class="card-f center stack">
                if countdown.can_resend() || *resending {
                  <button class="ghost" onclick={on_resend} disabled={*resending}>
                    { if *resending { "Resending..." } else { "Resend verification code" } }
                  </button>
                } else {
                  <p class="small">{ format!("Resend code in {} seconds", countdown.remaining()) }</p>
                }
                <button class="link" onclick={on_back}>{ "Back to form" }</button>
              </div>

              <div class="note">
                <strong>{ "Demo:" }</strong>
                { " Use code " }
                <span class="code">{ props.config.demo_code.clone() }</span>
                { format!(" or any {code_length}-digit code to proceed") }
              </div>
            </div>
          </div>
        </section>
    }
}
