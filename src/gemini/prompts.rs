//! Prompt builders for the two request kinds.
//!
//! The analysis prompt pins down the JSON contract the validator expects:
//! Czech answer text, Czech field names, a single whole-CZK cost figure, and
//! no markdown around the object. The lookup prompt constrains the model to
//! answer with the bare device name or an empty string.

use crate::models::DeviceType;

fn device_noun(device_type: DeviceType) -> &'static str {
    match device_type {
        DeviceType::Phone => "telefon",
        DeviceType::Tablet => "tablet",
    }
}

fn model_or_unspecified(device_model: &str) -> &str {
    let trimmed = device_model.trim();
    if trimmed.is_empty() { "Není specifikován" } else { trimmed }
}

pub fn analysis_system_instruction(device_type: DeviceType, device_model: &str) -> String {
    format!(
        "Jste expert na opravy mobilních zařízení (telefony a tablety). Vaším úkolem je \
         analyzovat problém popsaný uživatelem pro zadaný typ zařízení ({device}) a případně \
         konkrétní model ({model}), identifikovat pravděpodobnou závadu a odhadnout cenu opravy \
         v českých korunách (Kč) jako jedno celé číslo (např. 2500, ne \"2000-3000 Kč\"). \
         Dále uveďte klady a zápory opravy daného problému jako pole stringů. Pokud je \
         specifikován model zařízení, přidejte velmi stručné základní info o zařízení, pokud je \
         snadno dostupné. Používejte aktuální tržní ceny náhradních dílů a běžné ceny práce v \
         českých servisech. Odpovídejte pouze česky. Poskytněte odpověď jako platný JSON objekt \
         bez jakéhokoli dalšího textu nebo markdownu kolem něj.",
        device = device_noun(device_type),
        model = model_or_unspecified(device_model),
    )
}

pub fn analysis_prompt(description: &str, device_type: DeviceType, device_model: &str) -> String {
    format!(
        "Typ zařízení: {device}\n\
         Model zařízení: {model}\n\
         Popis problému: \"{description}\"\n\n\
         Vraťte analýzu, odhad ceny (jako celé číslo), klady opravy (pole stringů), zápory \
         opravy (pole stringů) a volitelně stručné info o zařízení ve formátu JSON s klíči \
         \"problem_analyza\", \"odhadovana_cena_kc\", \"klady_opravy\", \"zapory_opravy\" a \
         \"info_o_zarizeni\". Příklad formátu:\n\
         {{\n\
           \"problem_analyza\": \"Pravděpodobně poškozený displej.\",\n\
           \"odhadovana_cena_kc\": 3000,\n\
           \"klady_opravy\": [\"Zachování funkčnosti zařízení.\"],\n\
           \"zapory_opravy\": [\"Cena opravy může být neekonomická.\"]\n\
         }}",
        device = device_noun(device_type),
        model = model_or_unspecified(device_model),
        description = description.trim(),
    )
}

pub fn identify_system_instruction() -> String {
    "Jste expert na mobilní zařízení. Vaším úkolem je na základě zadaného modelového čísla \
     (např. SM-G998B, A2643, 2201116SG) identifikovat plný název zařízení (značka a model). \
     Odpovídejte pouze plným názvem zařízení, například: \"Samsung Galaxy S21 Ultra\", \
     \"Apple iPhone 13 Pro\". Pokud modelové číslo není rozpoznatelné nebo je nejednoznačné, \
     odpovězte prázdným řetězcem. Neuvádějte žádný další text."
        .to_string()
}

pub fn identify_prompt(model_number: &str) -> String {
    format!("Identifikuj zařízení s modelovým číslem: \"{}\".", model_number.trim())
}
