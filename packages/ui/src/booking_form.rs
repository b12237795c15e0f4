use api::booking::{self, BookingError, BookingReceipt, BookingRequest, MIN_FILL_MILLIS};
use dioxus::prelude::*;

use crate::locale::{use_locale, Lang, Translations};
use crate::toast::use_toasts;

const BOOKING_CSS: Asset = asset!("/assets/styling/booking.css");

/// `"3 человека"`, `"5 Personen"`, ...
pub fn guests_label(lang: Lang, count: u8) -> String {
    let form = &crate::locale::t(lang).contact.form;
    let noun = match lang {
        Lang::Ru => {
            let (ones, tens) = (count % 10, count % 100);
            if ones == 1 && tens != 11 {
                form.person_one
            } else if (2..=4).contains(&ones) && !(12..=14).contains(&tens) {
                form.person_few
            } else {
                form.person_many
            }
        }
        Lang::De | Lang::En | Lang::Uz if count == 1 => form.person_one,
        Lang::De | Lang::En | Lang::Uz => form.person_many,
    };
    format!("{count} {noun}")
}

/// Localized message for a rejected reservation.
pub fn rejection_message(tr: &'static Translations, error: &BookingError) -> &'static str {
    match error {
        BookingError::TooFast => tr.contact.form.too_fast,
        BookingError::Closed(_) => tr.contact.form.closed_day,
        BookingError::InvalidTicket => tr.contact.form.expired,
        _ => tr.contact.form.invalid,
    }
}

#[component]
pub fn BookingForm() -> Element {
    let locale = use_locale();
    let tr = locale.tr();
    let form = &tr.contact.form;
    let toasts = use_toasts();

    let mut ticket = use_resource(|| async move { api::booking_ticket().await });
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut guests = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let parsed_date = booking::parse_date(&date());
    let times = parsed_date.map(booking::available_times).unwrap_or_default();
    let time_placeholder = match parsed_date {
        None => form.date_first,
        Some(_) if times.is_empty() => form.no_times,
        Some(_) => form.please_select,
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let request = BookingRequest {
            name: name(),
            email: email(),
            phone: phone(),
            guests: guests(),
            date: date(),
            time: time(),
            message: message(),
            website: website(),
        };
        // Field checks run locally; the fill time is measured by the server.
        if let Err(e) = booking::validate(&request, MIN_FILL_MILLIS) {
            if e != BookingError::Spam {
                toasts.error(rejection_message(tr, &e));
                return;
            }
        }
        let Some(Ok(issued)) = ticket() else {
            toasts.error(tr.contact.form.error);
            return;
        };

        sending.set(true);
        spawn(async move {
            match api::submit_booking(request, issued).await {
                Ok(BookingReceipt::Rejected(e)) => {
                    tracing::info!("booking_form.submit: rejected reason={e}");
                    toasts.error(rejection_message(tr, &e));
                    if e == BookingError::InvalidTicket {
                        ticket.restart();
                    }
                }
                Ok(BookingReceipt::Forwarded { .. } | BookingReceipt::Discarded) => {
                    toasts.success(tr.contact.form.success);
                    for mut field in [name, email, phone, guests, date, time, message] {
                        field.set(String::new());
                    }
                    ticket.restart();
                }
                Err(e) => {
                    tracing::warn!("booking_form.submit: failed error={e}");
                    toasts.error(tr.contact.form.error);
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BOOKING_CSS }
        form { class: "booking_form", onsubmit,
            div { class: "field",
                label { r#for: "booking_name", {form.name} }
                input {
                    id: "booking_name",
                    name: "name",
                    autocomplete: "name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            div { class: "field_row",
                div { class: "field",
                    label { r#for: "booking_email", {form.email} }
                    input {
                        id: "booking_email",
                        r#type: "email",
                        name: "email",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div { class: "field",
                    label { r#for: "booking_phone", {form.phone} }
                    input {
                        id: "booking_phone",
                        r#type: "tel",
                        name: "phone",
                        autocomplete: "tel",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                    }
                }
            }
            div { class: "field",
                label { r#for: "booking_guests", {form.guests} }
                select {
                    id: "booking_guests",
                    name: "guests",
                    value: "{guests}",
                    onchange: move |e| guests.set(e.value()),
                    option { value: "", {form.please_select} }
                    for count in 1..=10u8 {
                        option { key: "{count}", value: "{count}", {guests_label(locale.lang(), count)} }
                    }
                    option { value: "10+", {form.more_than_ten} }
                }
            }
            div { class: "field_row",
                div { class: "field",
                    label { r#for: "booking_date", {form.date} }
                    input {
                        id: "booking_date",
                        r#type: "date",
                        name: "date",
                        value: "{date}",
                        oninput: move |e| {
                            let next = e.value();
                            let keep = booking::parse_date(&next)
                                .is_some_and(|d| booking::available_times(d).contains(&time().as_str()));
                            if !keep {
                                time.set(String::new());
                            }
                            date.set(next);
                        },
                    }
                    if parsed_date.is_some() && times.is_empty() {
                        p { class: "field_hint", {form.closed_day} }
                    }
                }
                div { class: "field",
                    label { r#for: "booking_time", {form.time} }
                    select {
                        id: "booking_time",
                        name: "time",
                        value: "{time}",
                        disabled: times.is_empty(),
                        onchange: move |e| time.set(e.value()),
                        option { value: "", {time_placeholder} }
                        for slot in times.iter() {
                            option { key: "{slot}", value: "{slot}", "{slot}" }
                        }
                    }
                }
            }
            div { class: "field",
                label { r#for: "booking_message", {form.message} }
                textarea {
                    id: "booking_message",
                    name: "message",
                    rows: 4,
                    value: "{message}",
                    oninput: move |e| message.set(e.value()),
                }
            }
            // Honeypot: invisible to people, tempting for bots.
            div { class: "hp_field", "aria-hidden": "true",
                input {
                    name: "website",
                    tabindex: "-1",
                    autocomplete: "off",
                    value: "{website}",
                    oninput: move |e| website.set(e.value()),
                }
            }
            button {
                class: "btn primary",
                r#type: "submit",
                disabled: sending(),
                if sending() { {form.sending} } else { {form.submit} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::t;

    #[test]
    fn russian_guest_counts_use_three_forms() {
        assert_eq!(guests_label(Lang::Ru, 1), "1 человек");
        assert_eq!(guests_label(Lang::Ru, 3), "3 человека");
        assert_eq!(guests_label(Lang::Ru, 5), "5 человек");
        assert_eq!(guests_label(Lang::Ru, 10), "10 человек");
    }

    #[test]
    fn other_languages_use_singular_and_plural() {
        assert_eq!(guests_label(Lang::De, 1), "1 Person");
        assert_eq!(guests_label(Lang::De, 2), "2 Personen");
        assert_eq!(guests_label(Lang::En, 4), "4 people");
        assert_eq!(guests_label(Lang::Uz, 7), "7 kishi");
    }

    #[test]
    fn rejections_map_to_form_messages() {
        let tr = t(Lang::En);
        assert_eq!(rejection_message(tr, &BookingError::TooFast), tr.contact.form.too_fast);
        assert_eq!(
            rejection_message(tr, &BookingError::Closed("Mon".to_string())),
            tr.contact.form.closed_day
        );
        assert_eq!(rejection_message(tr, &BookingError::Email), tr.contact.form.invalid);
        assert_eq!(
            rejection_message(tr, &BookingError::InvalidTicket),
            tr.contact.form.expired
        );
    }
}
