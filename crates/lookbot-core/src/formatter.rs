//! Response formatting.
//!
//! All user-facing text is Ukrainian; the Tokopedia links carry Indonesian
//! queries. The analysis response is built as a sequence of logical blocks
//! joined with [`chunker::BLOCK_DELIMITER`] so the chunker can split long
//! responses without ever separating an item name from its link.

use rand::seq::SliceRandom;

use crate::{
    analysis::Analysis,
    chunker::BLOCK_DELIMITER,
    tokopedia,
};

const GREETINGS: [&str; 8] = [
    "Ох ти і загнув! Окей, ось що знайшов:",
    "Ого, який лук! Тримай посилання:",
    "Нічо так! Ось що підібрав:",
    "О, бачу стиль! Лови:",
    "Круто! Ось твої луки:",
    "Файний вибір! Тримай:",
    "Вау, це щось! Ось посилання:",
    "Зрозумів завдання! Лови:",
];

/// Format an analysis into a reply message, with a random greeting.
pub fn format_analysis_response(analysis: &Analysis, tokopedia_base_url: &str) -> String {
    let greeting = GREETINGS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETINGS[0]);
    format_analysis_response_with_greeting(analysis, tokopedia_base_url, greeting)
}

fn format_analysis_response_with_greeting(
    analysis: &Analysis,
    tokopedia_base_url: &str,
    greeting: &str,
) -> String {
    if analysis.is_empty() {
        return format_no_clothing_message().to_string();
    }

    let mut blocks: Vec<String> = vec![greeting.to_string()];
    let many_people = analysis.people.len() > 1;

    for (i, person) in analysis.people.iter().enumerate() {
        if many_people {
            let label = person
                .description_ua
                .clone()
                .unwrap_or_else(|| format!("Людина {}", i + 1));
            blocks.push(format!("**{label}**"));
        }

        for item in &person.items {
            let Some(query) = item.search_query_id.as_deref().filter(|q| !q.is_empty()) else {
                continue;
            };
            let name = item.name_ua.as_deref().unwrap_or("Невідомий предмет");
            let url = tokopedia::search_url(tokopedia_base_url, query);
            blocks.push(format!("{name}\n{url}"));
        }
    }

    blocks.join(BLOCK_DELIMITER)
}

pub fn format_start_message() -> &'static str {
    "Допомагаю знайти луки на Tokopedia. Кидай фото - кину посилання!"
}

pub fn format_help_message() -> &'static str {
    "Як користуватися ботом:\n\n\
     1. Надішли фото людини в одязі\n\
     2. Зачекай кілька секунд\n\
     3. Отримай посилання на Tokopedia для кожного предмета одягу!\n\n\
     Команди:\n\
     /start - Почати роботу з ботом\n\
     /help - Показати цю довідку"
}

pub fn format_processing_message() -> &'static str {
    "Аналізую фото... Зачекай трохи!"
}

pub fn format_no_clothing_message() -> &'static str {
    "Не вдалося знайти одяг на цьому фото. \
     Спробуй надіслати інше фото з людьми у чіткому одязі!"
}

pub fn format_error_message(error: Option<&str>) -> String {
    match error {
        Some(e) => format!("Ой, сталася помилка! {e}"),
        None => "Ой, сталася помилка! Спробуй ще раз пізніше.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parse_analysis;

    const BASE: &str = "https://www.tokopedia.com/search?q=";

    fn sample(people: &str) -> Analysis {
        parse_analysis(&format!(r#"{{"people": {people}}}"#)).unwrap()
    }

    #[test]
    fn single_person_has_no_label_block() {
        let analysis = sample(
            r#"[{"description_ua": "Хлопець", "items": [
                {"name_ua": "Капелюх", "search_query_id": "topi pantai murah"}
            ]}]"#,
        );
        let text = format_analysis_response_with_greeting(&analysis, BASE, "Привіт!");

        let blocks: Vec<&str> = text.split(BLOCK_DELIMITER).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Привіт!");
        assert_eq!(
            blocks[1],
            "Капелюх\nhttps://www.tokopedia.com/search?q=topi%20pantai%20murah"
        );
    }

    #[test]
    fn multiple_people_get_label_blocks() {
        let analysis = sample(
            r#"[
              {"description_ua": "Перший", "items": [{"name_ua": "А", "search_query_id": "a"}]},
              {"items": [{"name_ua": "Б", "search_query_id": "b"}]}
            ]"#,
        );
        let text = format_analysis_response_with_greeting(&analysis, BASE, "Лови:");

        let blocks: Vec<&str> = text.split(BLOCK_DELIMITER).collect();
        assert_eq!(blocks[1], "**Перший**");
        assert_eq!(blocks[3], "**Людина 2**");
    }

    #[test]
    fn items_without_query_are_skipped() {
        let analysis = sample(
            r#"[{"items": [
                {"name_ua": "Без запиту"},
                {"name_ua": "Шорти", "search_query_id": "celana pendek murah"}
            ]}]"#,
        );
        let text = format_analysis_response_with_greeting(&analysis, BASE, "Лови:");
        assert!(!text.contains("Без запиту"));
        assert!(text.contains("Шорти"));
    }

    #[test]
    fn empty_analysis_asks_for_another_photo() {
        let analysis = sample("[]");
        let text = format_analysis_response_with_greeting(&analysis, BASE, "Лови:");
        assert_eq!(text, format_no_clothing_message());
    }

    #[test]
    fn random_greeting_is_one_of_the_known_ones() {
        let analysis = sample(r#"[{"items": [{"name_ua": "А", "search_query_id": "a"}]}]"#);
        let text = format_analysis_response(&analysis, BASE);
        let first = text.split(BLOCK_DELIMITER).next().unwrap();
        assert!(GREETINGS.contains(&first));
    }
}
