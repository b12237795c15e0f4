//! Translated UI strings.
//!
//! Every language builds the full [`Translations`] record, so a missing
//! string is a compile error rather than a runtime fallback. The string-keyed
//! [`lookup`] exists for callers that only have a key; it falls back from the
//! requested language to the default language and finally to the key itself.

use super::Lang;

#[derive(Clone)]
pub struct Translations {
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub menu: Menu,
    pub hours: Hours,
    pub location: Location,
    pub gallery: Gallery,
    pub review: Review,
    pub contact: Contact,
    pub footer: Footer,
    pub language: LanguagePicker,
    pub not_found: NotFound,
}

#[derive(Clone)]
pub struct Nav {
    pub about: &'static str,
    pub menu: &'static str,
    pub location: &'static str,
    pub contact: &'static str,
    pub reserve: &'static str,
}

#[derive(Clone)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_reserve: &'static str,
    pub cta_menu: &'static str,
}

#[derive(Clone)]
pub struct About {
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Clone)]
pub struct Menu {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub full_menu: &'static str,
    pub back: &'static str,
    pub categories: MenuCategories,
    pub footnote: &'static str,
    pub reservation_hint: &'static str,
}

#[derive(Clone)]
pub struct MenuCategories {
    pub mains: &'static str,
    pub appetizers: &'static str,
    pub sides: &'static str,
    pub drinks: &'static str,
    pub desserts: &'static str,
}

#[derive(Clone)]
pub struct Hours {
    pub title: &'static str,
    pub weekdays: &'static str,
    pub weekend: &'static str,
    pub monday: &'static str,
    pub closed: &'static str,
    pub note: &'static str,
}

#[derive(Clone)]
pub struct Location {
    pub title: &'static str,
    pub address: &'static str,
    pub district: &'static str,
    pub get_directions: &'static str,
    pub call_us: &'static str,
}

#[derive(Clone)]
pub struct Gallery {
    pub title: &'static str,
}

/// Floating "leave a review" prompt.
#[derive(Clone)]
pub struct Review {
    pub teaser: &'static str,
    pub action: &'static str,
    pub source: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

#[derive(Clone)]
pub struct Contact {
    pub title: &'static str,
    pub form: ContactForm,
    pub fallback: &'static str,
    pub catering: &'static str,
}

#[derive(Clone)]
pub struct ContactForm {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub guests: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub invalid: &'static str,
    pub too_fast: &'static str,
    pub expired: &'static str,
    pub closed_day: &'static str,
    pub please_select: &'static str,
    pub date_first: &'static str,
    pub no_times: &'static str,
    pub person_one: &'static str,
    pub person_few: &'static str,
    pub person_many: &'static str,
    pub more_than_ten: &'static str,
}

#[derive(Clone)]
pub struct Footer {
    pub impressum: &'static str,
    pub privacy: &'static str,
    pub rights: &'static str,
}

#[derive(Clone)]
pub struct LanguagePicker {
    pub label: &'static str,
}

#[derive(Clone)]
pub struct NotFound {
    pub title: &'static str,
    pub body: &'static str,
    pub home: &'static str,
}

/// The translation table for `lang`.
pub fn t(lang: Lang) -> &'static Translations {
    match lang {
        Lang::De => &DE,
        Lang::En => &EN,
        Lang::Ru => &RU,
        Lang::Uz => &UZ,
    }
}

/// Resolve a dotted key such as `"nav.menu"`.
///
/// Empty or unknown entries fall back to the default language, then to the
/// key itself; this never fails.
pub fn lookup(lang: Lang, key: &str) -> &str {
    resolve(t, lang, key)
}

fn resolve<'t, 'k>(
    tables: impl Fn(Lang) -> &'t Translations,
    lang: Lang,
    key: &'k str,
) -> &'k str {
    entry(tables(lang), key)
        .or_else(|| entry(tables(Lang::DEFAULT), key))
        .unwrap_or(key)
}

fn entry(tr: &Translations, key: &str) -> Option<&'static str> {
    let value = match key {
        "nav.about" => tr.nav.about,
        "nav.menu" => tr.nav.menu,
        "nav.location" => tr.nav.location,
        "nav.contact" => tr.nav.contact,
        "nav.reserve" => tr.nav.reserve,
        "hero.title" => tr.hero.title,
        "hero.subtitle" => tr.hero.subtitle,
        "hero.cta_reserve" => tr.hero.cta_reserve,
        "hero.cta_menu" => tr.hero.cta_menu,
        "about.title" => tr.about.title,
        "about.content" => tr.about.content,
        "menu.title" => tr.menu.title,
        "menu.subtitle" => tr.menu.subtitle,
        "menu.full_menu" => tr.menu.full_menu,
        "menu.back" => tr.menu.back,
        "menu.categories.mains" => tr.menu.categories.mains,
        "menu.categories.appetizers" => tr.menu.categories.appetizers,
        "menu.categories.sides" => tr.menu.categories.sides,
        "menu.categories.drinks" => tr.menu.categories.drinks,
        "menu.categories.desserts" => tr.menu.categories.desserts,
        "menu.footnote" => tr.menu.footnote,
        "menu.reservation_hint" => tr.menu.reservation_hint,
        "hours.title" => tr.hours.title,
        "hours.weekdays" => tr.hours.weekdays,
        "hours.weekend" => tr.hours.weekend,
        "hours.monday" => tr.hours.monday,
        "hours.closed" => tr.hours.closed,
        "hours.note" => tr.hours.note,
        "location.title" => tr.location.title,
        "location.address" => tr.location.address,
        "location.district" => tr.location.district,
        "location.get_directions" => tr.location.get_directions,
        "location.call_us" => tr.location.call_us,
        "gallery.title" => tr.gallery.title,
        "review.teaser" => tr.review.teaser,
        "review.action" => tr.review.action,
        "review.source" => tr.review.source,
        "review.open" => tr.review.open,
        "review.close" => tr.review.close,
        "contact.title" => tr.contact.title,
        "contact.fallback" => tr.contact.fallback,
        "contact.catering" => tr.contact.catering,
        "contact.form.name" => tr.contact.form.name,
        "contact.form.email" => tr.contact.form.email,
        "contact.form.phone" => tr.contact.form.phone,
        "contact.form.guests" => tr.contact.form.guests,
        "contact.form.date" => tr.contact.form.date,
        "contact.form.time" => tr.contact.form.time,
        "contact.form.message" => tr.contact.form.message,
        "contact.form.submit" => tr.contact.form.submit,
        "contact.form.sending" => tr.contact.form.sending,
        "contact.form.success" => tr.contact.form.success,
        "contact.form.error" => tr.contact.form.error,
        "contact.form.invalid" => tr.contact.form.invalid,
        "contact.form.too_fast" => tr.contact.form.too_fast,
        "contact.form.expired" => tr.contact.form.expired,
        "contact.form.closed_day" => tr.contact.form.closed_day,
        "contact.form.please_select" => tr.contact.form.please_select,
        "contact.form.date_first" => tr.contact.form.date_first,
        "contact.form.no_times" => tr.contact.form.no_times,
        "footer.impressum" => tr.footer.impressum,
        "footer.privacy" => tr.footer.privacy,
        "footer.rights" => tr.footer.rights,
        "language.label" => tr.language.label,
        "not_found.title" => tr.not_found.title,
        "not_found.body" => tr.not_found.body,
        "not_found.home" => tr.not_found.home,
        _ => return None,
    };
    (!value.is_empty()).then_some(value)
}

static DE: Translations = Translations {
    nav: Nav {
        about: "Über uns",
        menu: "Speisekarte",
        location: "Kontakt",
        contact: "Kontakt",
        reserve: "Reservieren",
    },
    hero: Hero {
        title: "CARAVAN – Zentralasien in Frankfurt.",
        subtitle: "Authentische Küche, warme Gastfreundschaft und lebendige Teekultur in Frankfurt am Main.",
        cta_reserve: "Tisch anfragen",
        cta_menu: "Highlights ansehen",
    },
    about: About {
        title: "Unsere Geschichte",
        content: "Willkommen im CARAVAN. Wir bringen die reichen Aromen und die herzliche Gastfreundschaft der Seidenstraße nach Frankfurt. Unsere Küche zelebriert die kulinarischen Traditionen Zentralasiens – von handgezogenen Nudeln bis zu langsam gegartem Plov. Bei uns ist Essen mehr als nur Nahrung; es ist ein gemeinschaftliches Erlebnis, geteilt mit Freunden und Familie in einer Atmosphäre, die sich wie zu Hause anfühlt.",
    },
    menu: Menu {
        title: "Kulinarische Highlights",
        subtitle: "Eine Auswahl unserer beliebtesten Gerichte. Das Angebot kann saisonal variieren.",
        full_menu: "Vollständige Speisekarte",
        back: "Zurück",
        categories: MenuCategories {
            mains: "Hauptgerichte",
            appetizers: "Vorspeisen",
            sides: "Beilagen",
            drinks: "Getränke",
            desserts: "Desserts",
        },
        footnote: "Alle Preise inkl. MwSt. • Allergene und Zusatzstoffe auf Anfrage • Alle Gerichte sind Halal",
        reservation_hint: "Reservierung empfohlen • 069 95909158",
    },
    hours: Hours {
        title: "Öffnungszeiten",
        weekdays: "Dienstag – Freitag",
        weekend: "Samstag – Sonntag",
        monday: "Montag",
        closed: "Geschlossen",
        note: "An Feiertagen können die Zeiten abweichen. Bitte rufen Sie an.",
    },
    location: Location {
        title: "Standort",
        address: "Wöllstädter Str. 11, 60385 Frankfurt am Main",
        district: "Heddernheim / Frankfurt am Main",
        get_directions: "Route planen",
        call_us: "Anrufen",
    },
    gallery: Gallery { title: "Einblicke" },
    review: Review {
        teaser: "Zufrieden mit uns?",
        action: "Bewertung abgeben",
        source: "Google Bewertungen",
        open: "Google Bewertung",
        close: "Schließen",
    },
    contact: Contact {
        title: "Reservierung & Kontakt",
        form: ContactForm {
            name: "Ihr Name",
            email: "E-Mail",
            phone: "Telefonnummer",
            guests: "Anzahl der Personen",
            date: "Datum",
            time: "Uhrzeit",
            message: "Nachricht (Optional)",
            submit: "Anfrage senden",
            sending: "Wird gesendet…",
            success: "Ihre Reservierungsanfrage wurde erfolgreich gesendet! Wir melden uns in Kürze.",
            error: "Es gab ein Problem beim Senden. Bitte versuchen Sie es erneut.",
            invalid: "Bitte überprüfen Sie Ihre Angaben.",
            too_fast: "Bitte nehmen Sie sich Zeit, das Formular auszufüllen.",
            expired: "Das Formular ist abgelaufen. Bitte senden Sie es erneut.",
            closed_day: "Montags haben wir geschlossen.",
            please_select: "Bitte wählen",
            date_first: "Bitte zuerst Datum wählen",
            no_times: "Keine verfügbaren Zeiten",
            person_one: "Person",
            person_few: "Personen",
            person_many: "Personen",
            more_than_ten: "Mehr als 10 Personen",
        },
        fallback: "Funktioniert das Formular nicht? Schreiben Sie uns:",
        catering: "Catering auf Anfrage verfügbar.",
    },
    footer: Footer {
        impressum: "Impressum",
        privacy: "Datenschutz",
        rights: "Alle Rechte vorbehalten.",
    },
    language: LanguagePicker {
        label: "Sprache wählen",
    },
    not_found: NotFound {
        title: "Seite nicht gefunden",
        body: "Diese Seite gibt es leider nicht.",
        home: "Zur Startseite",
    },
};

static EN: Translations = Translations {
    nav: Nav {
        about: "About",
        menu: "Menu",
        location: "Location",
        contact: "Contact",
        reserve: "Reserve",
    },
    hero: Hero {
        title: "CARAVAN – Central Asian comfort food in Frankfurt.",
        subtitle: "Authentic flavors, warm hospitality, and vibrant tea culture in Frankfurt am Main.",
        cta_reserve: "Book a Table",
        cta_menu: "View Highlights",
    },
    about: About {
        title: "Our Story",
        content: "Welcome to CARAVAN. We bring the rich flavors and warm hospitality of the ancient Silk Road to Frankfurt. Our kitchen celebrates the culinary traditions of Central Asia—from hand-pulled noodles to slow-cooked Plov. Here, dining is more than just food; it is a communal experience shared with friends and family in an atmosphere that feels like home.",
    },
    menu: Menu {
        title: "Menu Highlights",
        subtitle: "A selection of our favorites. Offerings may vary seasonally.",
        full_menu: "View Full Menu",
        back: "Back",
        categories: MenuCategories {
            mains: "Main Dishes",
            appetizers: "Appetizers",
            sides: "Sides",
            drinks: "Drinks",
            desserts: "Desserts",
        },
        footnote: "All prices include VAT • Allergen information available on request • All dishes are Halal",
        reservation_hint: "Reservation recommended • 069 95909158",
    },
    hours: Hours {
        title: "Opening Hours",
        weekdays: "Tuesday – Friday",
        weekend: "Saturday – Sunday",
        monday: "Monday",
        closed: "Closed",
        note: "Hours may vary on holidays. Call to confirm.",
    },
    location: Location {
        title: "Location",
        address: "Wöllstädter Str. 11, 60385 Frankfurt am Main",
        district: "Heddernheim / Frankfurt am Main",
        get_directions: "Get Directions",
        call_us: "Call Us",
    },
    gallery: Gallery { title: "Gallery" },
    review: Review {
        teaser: "Love our food?",
        action: "Share your review",
        source: "Google Reviews",
        open: "Google review",
        close: "Close",
    },
    contact: Contact {
        title: "Reservations & Contact",
        form: ContactForm {
            name: "Your Name",
            email: "Email",
            phone: "Phone Number",
            guests: "Number of Guests",
            date: "Date",
            time: "Time",
            message: "Message (Optional)",
            submit: "Send Request",
            sending: "Sending…",
            success: "Your reservation request has been sent successfully! We'll be in touch soon.",
            error: "There was a problem sending your request. Please try again.",
            invalid: "Please check your details.",
            too_fast: "Please take your time filling out the form.",
            expired: "The form has expired. Please send it again.",
            closed_day: "We are closed on Mondays.",
            please_select: "Please select",
            date_first: "Please select a date first",
            no_times: "No available times",
            person_one: "person",
            person_few: "people",
            person_many: "people",
            more_than_ten: "More than 10 people",
        },
        fallback: "Form not working? Email us at:",
        catering: "Catering available upon request.",
    },
    footer: Footer {
        impressum: "Imprint",
        privacy: "Privacy Policy",
        rights: "All rights reserved.",
    },
    language: LanguagePicker {
        label: "Select language",
    },
    not_found: NotFound {
        title: "Page not found",
        body: "Sorry, this page does not exist.",
        home: "Back to home",
    },
};

static RU: Translations = Translations {
    nav: Nav {
        about: "О нас",
        menu: "Меню",
        location: "Локация",
        contact: "Контакты",
        reserve: "Бронь",
    },
    hero: Hero {
        title: "CARAVAN — кухня Центральной Азии во Франкфурте.",
        subtitle: "Аутентичные вкусы, теплое гостеприимство и культура чаепития во Франкфурте-на-Майне.",
        cta_reserve: "Забронировать стол",
        cta_menu: "Смотреть меню",
    },
    about: About {
        title: "Наша история",
        content: "Добро пожаловать в CARAVAN. Мы привезли во Франкфурт богатые вкусы и теплое гостеприимство Шелкового пути. Наша кухня прославляет кулинарные традиции Центральной Азии — от тянутой лапши до томленого плова. Еда для нас — это не просто пища, а повод собраться с друзьями и семьей в атмосфере домашнего уюта.",
    },
    menu: Menu {
        title: "Хиты меню",
        subtitle: "Избранные блюда. Меню может меняться в зависимости от сезона.",
        full_menu: "Полное меню",
        back: "Назад",
        categories: MenuCategories {
            mains: "Основные блюда",
            appetizers: "Закуски",
            sides: "Гарниры",
            drinks: "Напитки",
            desserts: "Десерты",
        },
        footnote: "Все цены включают НДС • Информация об аллергенах по запросу • Все блюда халяльные",
        reservation_hint: "Рекомендуется бронирование • 069 95909158",
    },
    hours: Hours {
        title: "Часы работы",
        weekdays: "Вторник – Пятница",
        weekend: "Суббота – Воскресенье",
        monday: "Понедельник",
        closed: "Закрыто",
        note: "В праздничные дни часы могут меняться. Позвоните для уточнения.",
    },
    location: Location {
        title: "Как нас найти",
        address: "Wöllstädter Str. 11, 60385 Франкфурт-на-Майне",
        district: "Хеддернхайм / Франкфурт-на-Майне",
        get_directions: "Проложить маршрут",
        call_us: "Позвонить",
    },
    gallery: Gallery { title: "Галерея" },
    review: Review {
        teaser: "Понравилось?",
        action: "Оставить отзыв",
        source: "Google отзывы",
        open: "Отзыв в Google",
        close: "Закрыть",
    },
    contact: Contact {
        title: "Бронь и Контакты",
        form: ContactForm {
            name: "Ваше Имя",
            email: "Email",
            phone: "Телефон",
            guests: "Количество гостей",
            date: "Дата",
            time: "Время",
            message: "Сообщение (необязательно)",
            submit: "Отправить запрос",
            sending: "Отправка…",
            success: "Ваш запрос на бронирование успешно отправлен! Скоро свяжемся с вами.",
            error: "Возникла проблема при отправке. Пожалуйста, попробуйте снова.",
            invalid: "Пожалуйста, проверьте введённые данные.",
            too_fast: "Пожалуйста, не торопитесь при заполнении формы.",
            expired: "Срок действия формы истёк. Пожалуйста, отправьте её снова.",
            closed_day: "По понедельникам мы закрыты.",
            please_select: "Пожалуйста, выберите",
            date_first: "Сначала выберите дату",
            no_times: "Нет доступного времени",
            person_one: "человек",
            person_few: "человека",
            person_many: "человек",
            more_than_ten: "Более 10 человек",
        },
        fallback: "Не получается отправить? Напишите нам:",
        catering: "Кейтеринг доступен по запросу.",
    },
    footer: Footer {
        impressum: "Импрессум",
        privacy: "Конфиденциальность",
        rights: "Все права защищены.",
    },
    language: LanguagePicker {
        label: "Выбрать язык",
    },
    not_found: NotFound {
        title: "Страница не найдена",
        body: "К сожалению, такой страницы нет.",
        home: "На главную",
    },
};

static UZ: Translations = Translations {
    nav: Nav {
        about: "Biz haqimizda",
        menu: "Menyu",
        location: "Manzil",
        contact: "Aloqa",
        reserve: "Bron qilish",
    },
    hero: Hero {
        title: "CARAVAN – Frankfurt shahrida Markaziy Osiyo oshxonasi.",
        subtitle: "Frankfurt am Main shahrida asl ta'mlar, samimiy mehmondo'stlik va choy madaniyati.",
        cta_reserve: "Stol bron qilish",
        cta_menu: "Menyu ko'rish",
    },
    about: About {
        title: "Bizning tariximiz",
        content: "CARAVAN restoraniga xush kelibsiz. Biz Frankfurt shahriga Ipak yo'lining boy ta'mlari va samimiy mehmondo'stligini olib keldik. Oshxonamiz Markaziy Osiyoning oshpazlik an'analarini nishonlaydi – qo'lda tortilgan lag'mondan tortib sekin pishirilgan oshgacha. Bizda ovqatlanish shunchaki ovqat emas; bu do'stlar va oila bilan uyga o'xshagan muhitda baham ko'riladigan jamoaviy tajribadir.",
    },
    menu: Menu {
        title: "Oshxona diqqatga sazovor taomlar",
        subtitle: "Bizning eng mashhur taomlarimizdan tanlov. Taomlar mavsumga qarab o'zgarishi mumkin.",
        full_menu: "To'liq menyu",
        back: "Orqaga",
        categories: MenuCategories {
            mains: "Asosiy taomlar",
            appetizers: "Taomlar",
            sides: "Garnirlar",
            drinks: "Ichimliklar",
            desserts: "Shirinliklar",
        },
        footnote: "Barcha narxlar QQS bilan • Allergen haqida ma'lumot so'rovga binoan • Barcha taomlar halol",
        reservation_hint: "Bron qilish tavsiya etiladi • 069 95909158",
    },
    hours: Hours {
        title: "Ish vaqti",
        weekdays: "Seshanba – Juma",
        weekend: "Shanba – Yakshanba",
        monday: "Dushanba",
        closed: "Yopiq",
        note: "Bayram kunlari vaqt o'zgarishi mumkin. Tasdiqlash uchun qo'ng'iroq qiling.",
    },
    location: Location {
        title: "Manzil",
        address: "Wöllstädter Str. 11, 60385 Frankfurt am Main",
        district: "Heddernheim / Frankfurt am Main",
        get_directions: "Yo'nalish olish",
        call_us: "Qo'ng'iroq qilish",
    },
    gallery: Gallery { title: "Galereya" },
    review: Review {
        teaser: "Yoqdimi?",
        action: "Fikr qoldiring",
        source: "Google sharhlari",
        open: "Google sharhi",
        close: "Yopish",
    },
    contact: Contact {
        title: "Bron qilish va Aloqa",
        form: ContactForm {
            name: "Ismingiz",
            email: "Elektron pochta",
            phone: "Telefon raqam",
            guests: "Mehmonlar soni",
            date: "Sana",
            time: "Vaqt",
            message: "Xabar (Ixtiyoriy)",
            submit: "So'rov yuborish",
            sending: "Yuborilmoqda…",
            success: "Sizning bron qilish so'rovingiz muvaffaqiyatli yuborildi! Tez orada bog'lanamiz.",
            error: "So'rovingizni yuborishda muammo yuz berdi. Iltimos, qayta urinib ko'ring.",
            invalid: "Iltimos, ma'lumotlaringizni tekshiring.",
            too_fast: "Iltimos, formani to'ldirishda shoshilmang.",
            expired: "Forma muddati tugadi. Iltimos, qaytadan yuboring.",
            closed_day: "Dushanba kunlari yopiqmiz.",
            please_select: "Iltimos, tanlang",
            date_first: "Avval sanani tanlang",
            no_times: "Mos vaqt mavjud emas",
            person_one: "kishi",
            person_few: "kishi",
            person_many: "kishi",
            more_than_ten: "10 kishidan ortiq",
        },
        fallback: "Shakl ishlamayaptimi? Bizga yozing:",
        catering: "So'rov bo'yicha ketering xizmati mavjud.",
    },
    footer: Footer {
        impressum: "Impressum",
        privacy: "Maxfiylik siyosati",
        rights: "Barcha huquqlar himoyalangan.",
    },
    language: LanguagePicker {
        label: "Tilni tanlang",
    },
    not_found: NotFound {
        title: "Sahifa topilmadi",
        body: "Afsuski, bunday sahifa mavjud emas.",
        home: "Bosh sahifaga",
    },
};
