//! The fashion-analysis prompt sent to Gemini alongside the photo.
//!
//! Ukrainian instructions, Indonesian search queries: the bot's audience
//! reads Ukrainian, Tokopedia searches work best in Indonesian.

const ANALYSIS_PROMPT: &str = r#"Ти - експерт з моди для БОЖЕВІЛЬНОЇ ПЛЯЖНОЇ ВЕЧІРКИ (Beach Trash Party, Zatoka vibes, Verka Serduchka style).

Проаналізуй це зображення та визнач ВСІ предмети одягу на кожній людині.

ВАЖЛИВО:
- Відповідай УКРАЇНСЬКОЮ мовою
- Пошукові запити для Tokopedia - ІНДОНЕЗІЙСЬКОЮ
- Шукай ДЕШЕВІ, ТРЕШОВІ, БОЖЕВІЛЬНІ варіанти (для одноразової вечірки!)
- Пріоритет: дешевизна > якість

Для кожного предмета надай:
1. Назва українською (коротка, 3-5 слів максимум, смішна)
2. Пошуковий запит для Tokopedia (ІНДОНЕЗІЙСЬКОЮ!)
3. Категорія (top, bottom, accessory, footwear, headwear)

КРИТИЧНО для пошукових запитів - ЗАВЖДИ додавай МАКСИМУМ деталей:
- Колір (putih, hitam, merah, biru, pink, hijau, kuning, orange, ungu, coklat, abu-abu, emas, perak)
- Візерунок/принт (motif bunga, polos, garis-garis, kotak-kotak, motif abstrak, motif hewan)
- Тип/стиль (lengan pendek, lengan panjang, ketat, longgar, oversized, crop top)
- Матеріал якщо видно (katun, denim, kulit, sutra, rajut)
- "murah" в кінці для дешевих варіантів

Приклади ПРАВИЛЬНИХ детальних запитів:
- Біла сорочка з квітами → "Kemeja pria putih motif bunga lengan pendek murah"
- Чорні шорти → "Celana pendek pria hitam polos murah"
- Рожева майка → "Tank top wanita pink polos murah"
- Джинсова куртка синя → "Jaket denim biru pria murah"

Приклади з референсних даних:
{examples}

Поверни ТІЛЬКИ валідний JSON без markdown форматування:
{
  "people": [
    {
      "description_ua": "Опис людини українською",
      "items": [
        {"name_ua": "Назва українською", "search_query_id": "Indonesian query with color+pattern+style+murah", "category": "top/bottom/accessory/footwear/headwear"}
      ]
    }
  ]
}
"#;

/// Build the analysis prompt with lookbook reference examples interpolated.
pub fn analysis_prompt(reference_examples: &str) -> String {
    ANALYSIS_PROMPT.replace("{examples}", reference_examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_reference_examples() {
        let p = analysis_prompt("- Капелюх -> \"Topi murah\"");
        assert!(p.contains("- Капелюх -> \"Topi murah\""));
        assert!(!p.contains("{examples}"));
    }

    #[test]
    fn keeps_the_json_shape_description() {
        let p = analysis_prompt("");
        assert!(p.contains("\"people\""));
        assert!(p.contains("search_query_id"));
    }
}
