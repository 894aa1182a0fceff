use crate::models::activity::{Category, NewActivity};

fn sample(
    title: &str,
    category: Category,
    duration: u32,
    description: &str,
    tags: &[&str],
    indoor: bool,
    cost: &str,
) -> NewActivity {
    NewActivity {
        title: title.to_string(),
        category,
        duration,
        description: description.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        indoor,
        cost: cost.to_string(),
        address: None,
        lat: None,
        lng: None,
    }
}

/// Seoul sample catalog loaded by `POST /api/seed-data`.
pub fn sample_activities() -> Vec<NewActivity> {
    vec![
        // Food
        sample(
            "Bongpiyang Bangi",
            Category::Food,
            60,
            "Bongpiyang's grilled pork ribs are a well-known Seoul favourite.",
            &["#family_friendly", "#pork_ribs", "#parking"],
            true,
            "Estimated cost: 15,000 KRW per person",
        ),
        sample(
            "Gwangjang Market food stalls",
            Category::Food,
            90,
            "Mayak gimbap, bindaetteok and yukhoe, all the classic market food in one place.",
            &["#traditional_market", "#street_food", "#variety"],
            false,
            "Estimated cost: 20,000 KRW per person",
        ),
        sample(
            "Euljiro Nogari Alley",
            Category::Food,
            120,
            "Spend an evening over dried pollack and beer in retro Euljiro.",
            &["#night_view", "#nogari", "#atmosphere"],
            false,
            "Estimated cost: 25,000 KRW per person",
        ),
        // Sights
        sample(
            "Lotte World Tower & Seoul Sky",
            Category::Sight,
            150,
            "Take in the whole city from Seoul's landmark observation deck.",
            &["#landmark", "#attraction", "#observatory"],
            true,
            "Admission: 27,000 KRW for adults",
        ),
        sample(
            "Gyeongbokgung & National Folk Museum",
            Category::Sight,
            90,
            "Walk the main Joseon dynasty palace and get a feel for Korean history.",
            &["#history", "#culture", "#hanbok"],
            false,
            "Admission: 3,000 KRW",
        ),
        sample(
            "Namsan Tower night view",
            Category::Sight,
            90,
            "Ride the cable car up and watch the city lights from Namsan Tower.",
            &["#night_view", "#date_course", "#memories"],
            false,
            "Cable car: 11,000 KRW round trip",
        ),
        sample(
            "Bukchon Hanok Village walk",
            Category::Sight,
            90,
            "A quiet stroll through Bukchon's well-preserved traditional hanok houses.",
            &["#hanok", "#photo_spot", "#tradition"],
            false,
            "",
        ),
        // Shopping
        sample(
            "COEX Starfield & Starfield Library",
            Category::Shopping,
            120,
            "Asia's largest underground mall, with a stop at the Starfield Library.",
            &["#shopping", "#library", "#indoor"],
            true,
            "Free entry",
        ),
        sample(
            "Myeongdong shopping street",
            Category::Shopping,
            150,
            "Seoul's best-known shopping street.",
            &["#shopping", "#cosmetics", "#fashion"],
            false,
            "",
        ),
        sample(
            "Hongdae street shopping",
            Category::Shopping,
            120,
            "Browse quirky finds in trendy Hongdae.",
            &["#youth_street", "#unique_items", "#busking"],
            false,
            "",
        ),
        // Cafes
        sample(
            "Seongsu cafe crawl",
            Category::Cafe,
            60,
            "Slow coffee time in hip Seongsu-dong's cafe street.",
            &["#cafe", "#dessert", "#photo_spot"],
            true,
            "Estimated cost: 8,000 KRW per person",
        ),
        sample(
            "Itaewon rooftop cafe",
            Category::Cafe,
            90,
            "Coffee on an Itaewon rooftop overlooking downtown Seoul.",
            &["#rooftop", "#view", "#romance"],
            true,
            "Estimated cost: 12,000 KRW per person",
        ),
        sample(
            "Bukchon traditional teahouse",
            Category::Cafe,
            60,
            "Unwind in a teahouse set in a converted hanok.",
            &["#traditional_tea", "#hanok_cafe", "#healing"],
            true,
            "Estimated cost: 10,000 KRW per person",
        ),
    ]
}
