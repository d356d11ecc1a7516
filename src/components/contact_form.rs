use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::use_site_config;
use crate::contact::{ContactDraft, Submission};
use crate::dates::{format_iso, DateRange};
use crate::theme::{accent_button, MUTED};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Dates picked on the home page availability calendar.
    pub range: DateRange,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Phone,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let cfg = use_site_config();
    let draft = {
        let cfg = cfg.clone();
        use_state(move || ContactDraft::new(&cfg))
    };

    let submission = {
        let cfg = cfg.clone();
        use_memo(((*draft).clone(), props.range), move |(d, r)| d.submission(r, &cfg))
    };

    let on_text = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            match field {
                Field::Name => next.name = input.value(),
                Field::Email => next.email = input.value(),
                Field::Phone => next.phone = input.value(),
            }
            draft.set(next);
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft { message: area.value(), ..(*draft).clone() });
        })
    };

    let on_nights = {
        let draft = draft.clone();
        let cfg = cfg.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set((*draft).clone().with_nights_input(&input.value(), &cfg));
        })
    };

    let on_nights_blur = {
        let draft = draft.clone();
        Callback::from(move |_: FocusEvent| draft.set((*draft).clone().settle_nights()))
    };

    let (action, method, submit) = match &*submission {
        Submission::Relay { action } => (
            Some(action.clone()),
            Some("POST"),
            html! {
                <button type="submit" class="btn" style={accent_button()}>{ "Invia richiesta" }</button>
            },
        ),
        Submission::MailTo { href } => (
            None,
            None,
            html! {
                <a href={href.clone()} class="btn" style={accent_button()}>{ "Invia via email" }</a>
            },
        ),
    };

    let border = format!("border-color:{MUTED};");
    let iso = |d: Option<chrono::NaiveDate>| d.map(format_iso).unwrap_or_default();

    html! {
        <form class="contact-form" {action} {method}>
            <div class="pair">
                <input class="field" style={border.clone()} placeholder="Nome" name="name"
                    value={draft.name.clone()} oninput={on_text(Field::Name)} required={true} />
                <input class="field" style={border.clone()} placeholder="Email" name="email" type="email"
                    value={draft.email.clone()} oninput={on_text(Field::Email)} required={true} />
            </div>
            <div class="pair">
                <input class="field" style={border.clone()} placeholder="Telefono (opzionale)" name="phone"
                    value={draft.phone.clone()} oninput={on_text(Field::Phone)} />
                <input class="field" style={border.clone()} placeholder="Notti" name="nights" type="number"
                    min={cfg.nights.min.to_string()} max={cfg.nights.max.to_string()}
                    value={draft.nights_text.clone()} oninput={on_nights} onblur={on_nights_blur} />
            </div>
            <div class="pair">
                <input class="field" style={border.clone()} placeholder="Check‑in (AAAA‑MM‑GG)" name="checkin"
                    readonly={true} value={iso(props.range.check_in())} />
                <input class="field" style={border.clone()} placeholder="Check‑out (AAAA‑MM‑GG)" name="checkout"
                    readonly={true} value={iso(props.range.check_out())} />
            </div>
            <textarea class="field message" style={border} placeholder="Il tuo messaggio" name="message"
                value={draft.message.clone()} oninput={on_message} required={true} />
            { submit }
        </form>
    }
}
