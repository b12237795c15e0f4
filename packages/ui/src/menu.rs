//! The dish catalog shown on the home page and the full menu.

use crate::locale::{t, Lang};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mains,
    Appetizers,
    Sides,
    Drinks,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mains,
        Category::Appetizers,
        Category::Sides,
        Category::Drinks,
        Category::Desserts,
    ];

    pub fn title(self, lang: Lang) -> &'static str {
        let categories = &t(lang).menu.categories;
        match self {
            Category::Mains => categories.mains,
            Category::Appetizers => categories.appetizers,
            Category::Sides => categories.sides,
            Category::Drinks => categories.drinks,
            Category::Desserts => categories.desserts,
        }
    }

    pub fn dishes(self) -> impl Iterator<Item = &'static Dish> {
        MENU.iter().filter(move |dish| dish.category == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishId {
    Plov,
    Manty,
    Lagman,
    Shashlik,
    Samsa,
    Salad,
    Non,
    Tea,
    Ayran,
    Kompot,
    Halva,
    ChakChak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishText {
    pub name: &'static str,
    pub desc: &'static str,
}

macro_rules! dish_text {
    ($name:literal, $desc:literal) => {
        DishText {
            name: $name,
            desc: $desc,
        }
    };
}

impl DishId {
    /// One entry per language, in [`Lang::ALL`] order.
    fn texts(self) -> &'static [DishText; 4] {
        match self {
            DishId::Plov => &[
                dish_text!("Traditioneller Plov", "Das Herzstück usbekischer Küche. Reis, zartes Lammfleisch, gelbe Karotten, Kichererbsen und Rosinen, traditionell im Kazan gegart."),
                dish_text!("Traditional Plov", "The heart of Uzbek cuisine. Rice, tender lamb, yellow carrots, chickpeas, and raisins, cooked traditionally in a Kazan."),
                dish_text!("Традиционный Плов", "Сердце узбекской кухни. Рис, нежная баранина, желтая морковь, нут и изюм, приготовленные в казане."),
                dish_text!("An'anaviy Osh", "O'zbek oshxonasining yuragi. Guruch, yumshoq qo'y go'shti, sariq sabzi, no'xat va mayiz, an'anaviy ravishda qozonda pishiriladi."),
            ],
            DishId::Manty => &[
                dish_text!("Handgemachte Manty", "Große, saftige Teigtaschen, gefüllt mit fein gehacktem Fleisch und Zwiebeln, serviert mit Joghurt-Dip."),
                dish_text!("Handmade Manty", "Large, juicy dumplings filled with finely chopped meat and onions, served with a yogurt dip."),
                dish_text!("Манты ручной лепки", "Большие сочные манты с рубленым мясом и луком, подаются с йогуртовым соусом."),
                dish_text!("Qo'lda yasalgan Manti", "Mayda to'g'ralgan go'sht va piyoz bilan to'ldirilgan katta, sharbatli manti, yogurt sousi bilan beriladi."),
            ],
            DishId::Lagman => &[
                dish_text!("Uigurischer Lagman", "Handgezogene Nudeln in einer würzigen Brühe mit Rindfleisch, Paprika, Tomaten und frischen Kräutern."),
                dish_text!("Uyghur Lagman", "Hand-pulled noodles in a savory broth with beef, peppers, tomatoes, and fresh herbs."),
                dish_text!("Уйгурский Лагман", "Тянутая вручную лапша в наваристом бульоне с говядиной, перцем, томатами и свежей зеленью."),
                dish_text!("Uyg'ur Lag'moni", "Mol go'shti, qalampir, pomidor va yangi ko'katlar bilan mazali sho'rvada qo'lda tortilgan lag'mon."),
            ],
            DishId::Shashlik => &[
                dish_text!("Lamm Schaschlik", "Zart marinierte Lammspieße über Holzkohle gegrillt, serviert mit marinierten Zwiebeln."),
                dish_text!("Lamb Shashlik", "Tender marinated lamb skewers grilled over charcoal, served with marinated onions."),
                dish_text!("Шашлык из баранины", "Нежный маринованный шашлык, приготовленный на углях, с маринованным луком."),
                dish_text!("Qo'y go'shtidan Shashlik", "Ko'mirda qovurilgan marinadlangan yumshoq qo'y go'shti shishlari, marinadlangan piyoz bilan beriladi."),
            ],
            DishId::Samsa => &[
                dish_text!("Knusprige Samsa", "Im Ofen gebackene Teigtaschen mit würziger Fleisch- oder Kürbisfüllung."),
                dish_text!("Crispy Samsa", "Oven-baked pastries filled with spiced meat or pumpkin."),
                dish_text!("Хрустящая Самса", "Запеченные в тандыре пирожки с пряным мясом или тыквой."),
                dish_text!("Xamirli Somsa", "Ziravorli go'sht yoki qovoq bilan to'ldirilgan tandirda pishirilgan somsa."),
            ],
            DishId::Salad => &[
                dish_text!("Achichuk Salat", "Frischer Tomaten-Zwiebel-Salat mit Kräutern und Sumach."),
                dish_text!("Achichuk Salad", "Fresh tomato-onion salad with herbs and sumac."),
                dish_text!("Салат Ачичук", "Свежий салат из помидоров и лука с зеленью и сумахом."),
                dish_text!("Achichuk Salat", "Sabzavot va ziravorlar bilan yangi pomidor-piyoz salati."),
            ],
            DishId::Non => &[
                dish_text!("Tandoor Non", "Traditionelles Fladenbrot aus dem Lehmofen."),
                dish_text!("Tandoor Bread", "Traditional flatbread from the clay oven."),
                dish_text!("Тандырная лепёшка", "Традиционная лепёшка из глиняной печи."),
                dish_text!("Tandir Non", "Tandirda pishirilgan an'anaviy non."),
            ],
            DishId::Tea => &[
                dish_text!("Zentralasiatische Teezeremonie", "Ausgewählte Grün- und Schwarztees, serviert in traditionellen Pialas mit Trockenfrüchten und Nüssen."),
                dish_text!("Central Asian Tea", "Selected green and black teas served in traditional pialas with dried fruits and nuts."),
                dish_text!("Чайная церемония", "Отборный зеленый и черный чай, подается в пиалах с сухофруктами и орехами."),
                dish_text!("Markaziy Osiyo Choyi", "An'anaviy piyolalarda quritilgan mevalar va yong'oqlar bilan yashil va qora choylar taklif etiladi."),
            ],
            DishId::Ayran => &[
                dish_text!("Ayran", "Erfrischendes Joghurtgetränk mit Salz."),
                dish_text!("Ayran", "Refreshing yogurt drink with salt."),
                dish_text!("Айран", "Освежающий солёный кисломолочный напиток."),
                dish_text!("Ayron", "Tuz bilan tetiklashtiruvchi yogurt ichimligi."),
            ],
            DishId::Kompot => &[
                dish_text!("Kompott", "Hausgemachtes Früchtekompott."),
                dish_text!("Kompot", "Homemade fruit compote drink."),
                dish_text!("Компот", "Домашний компот из сухофруктов."),
                dish_text!("Kompot", "Uyda tayyorlangan mevali kompot."),
            ],
            DishId::Halva => &[
                dish_text!("Usbekische Halwa", "Traditionelle Sesam-Süßigkeit mit Nüssen."),
                dish_text!("Uzbek Halva", "Traditional sesame confection with nuts."),
                dish_text!("Узбекская Халва", "Традиционная кунжутная сладость с орехами."),
                dish_text!("O'zbek Halvasi", "Yong'oq bilan an'anaviy kunjut shirinligi."),
            ],
            DishId::ChakChak => &[
                dish_text!("Chak-Chak", "Knusprige Teigstücke in Honig."),
                dish_text!("Chak-Chak", "Crispy dough pieces in honey."),
                dish_text!("Чак-чак", "Хрустящие кусочки теста в мёде."),
                dish_text!("Chak-chak", "Asalda qovurilgan xamir bo'laklari."),
            ],
        }
    }

    pub fn text(self, lang: Lang) -> DishText {
        self.texts()[lang as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dish {
    pub id: DishId,
    pub category: Category,
    pub price_cents: u32,
}

const fn dish(id: DishId, category: Category, price_cents: u32) -> Dish {
    Dish {
        id,
        category,
        price_cents,
    }
}

pub static MENU: [Dish; 12] = [
    dish(DishId::Plov, Category::Mains, 1450),
    dish(DishId::Manty, Category::Mains, 1390),
    dish(DishId::Lagman, Category::Mains, 1350),
    dish(DishId::Shashlik, Category::Mains, 1690),
    dish(DishId::Samsa, Category::Appetizers, 450),
    dish(DishId::Salad, Category::Appetizers, 690),
    dish(DishId::Non, Category::Sides, 350),
    dish(DishId::Tea, Category::Drinks, 550),
    dish(DishId::Ayran, Category::Drinks, 350),
    dish(DishId::Kompot, Category::Drinks, 400),
    dish(DishId::Halva, Category::Desserts, 500),
    dish(DishId::ChakChak, Category::Desserts, 450),
];

/// Dishes featured on the home page.
pub const HIGHLIGHTS: [DishId; 6] = [
    DishId::Plov,
    DishId::Manty,
    DishId::Lagman,
    DishId::Samsa,
    DishId::Shashlik,
    DishId::Tea,
];

pub fn dish_by_id(id: DishId) -> Option<&'static Dish> {
    MENU.iter().find(|dish| dish.id == id)
}

/// `14,50 €` for the continental locales, `€14.50` in English.
pub fn format_price(cents: u32, lang: Lang) -> String {
    let (euros, rest) = (cents / 100, cents % 100);
    match lang {
        Lang::En => format!("€{euros}.{rest:02}"),
        Lang::De | Lang::Ru | Lang::Uz => format!("{euros},{rest:02} €"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texts_follow_language_order() {
        assert_eq!(DishId::Plov.text(Lang::De).name, "Traditioneller Plov");
        assert_eq!(DishId::Plov.text(Lang::En).name, "Traditional Plov");
        assert_eq!(DishId::Plov.text(Lang::Ru).name, "Традиционный Плов");
        assert_eq!(DishId::Plov.text(Lang::Uz).name, "An'anaviy Osh");
    }

    #[test]
    fn every_dish_is_named_in_every_language() {
        for dish in &MENU {
            for lang in Lang::ALL {
                let text = dish.id.text(lang);
                assert!(!text.name.is_empty(), "{:?} {lang}", dish.id);
                assert!(!text.desc.is_empty(), "{:?} {lang}", dish.id);
            }
        }
    }

    #[test]
    fn highlights_are_on_the_menu() {
        for id in HIGHLIGHTS {
            assert!(dish_by_id(id).is_some(), "{id:?}");
        }
    }

    #[test]
    fn categories_partition_the_menu() {
        let total: usize = Category::ALL.iter().map(|c| c.dishes().count()).sum();
        assert_eq!(total, MENU.len());
        assert_eq!(Category::Mains.dishes().count(), 4);
    }

    #[test]
    fn prices_are_localized() {
        assert_eq!(format_price(1450, Lang::De), "14,50 €");
        assert_eq!(format_price(1450, Lang::En), "€14.50");
        assert_eq!(format_price(405, Lang::Ru), "4,05 €");
    }
}
