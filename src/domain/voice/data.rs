//! Voice Context - 内置 Google 语音表
//!
//! 进程启动时加载一次的静态数据，由 catalog 模块持有；
//! 这里只有数据，没有逻辑。

use super::descriptor::{Gender, VoiceDescriptor, VoiceTier};

macro_rules! voice {
    ($lang:expr, $tier:ident, $code:expr, $hint:expr, $id:expr, $alias:expr, $gender:ident) => {
        VoiceDescriptor {
            provider: "google",
            language_name: $lang,
            tier: VoiceTier::$tier,
            language_code: $code,
            translate_hint: $hint,
            voice_id: $id,
            alias: $alias,
            gender: Gender::$gender,
        }
    };
}

/// 内置语音列表
pub(super) fn builtin_voices() -> Vec<VoiceDescriptor> {
    vec![
        voice!("Danish (Denmark)", Standard, "da-DK", "en", "da-DK-Standard-A", "Dora", Female),
        voice!("Danish (Denmark)", WaveNet, "da-DK", "en", "da-DK-Wavenet-A", "Heidi", Female),
        voice!("Dutch (Netherlands)", Standard, "nl-NL", "en", "nl-NL-Standard-A", "Eva", Female),
        voice!("Dutch (Netherlands)", WaveNet, "nl-NL", "en", "nl-NL-Wavenet-A", "Mila", Female),
        voice!("English (Australia)", Standard, "en-AU", "en", "en-AU-Standard-A", "Mia", Female),
        voice!("English (Australia)", Standard, "en-AU", "en", "en-AU-Standard-B", "Oliver", Male),
        voice!("English (Australia)", Standard, "en-AU", "en", "en-AU-Standard-C", "Chloe", Female),
        voice!("English (Australia)", Standard, "en-AU", "en", "en-AU-Standard-D", "Noah", Male),
        voice!("English (Australia)", WaveNet, "en-AU", "en", "en-AU-Wavenet-A", "Ava", Female),
        voice!("English (Australia)", WaveNet, "en-AU", "en", "en-AU-Wavenet-B", "Thomas", Male),
        voice!("English (Australia)", WaveNet, "en-AU", "en", "en-AU-Wavenet-C", "Isla", Female),
        voice!("English (Australia)", WaveNet, "en-AU", "en", "en-AU-Wavenet-D", "James", Male),
        voice!("English (UK)", Standard, "en-GB", "en", "en-GB-Standard-A", "Lily", Female),
        voice!("English (UK)", Standard, "en-GB", "en", "en-GB-Standard-B", "Harry", Male),
        voice!("English (UK)", Standard, "en-GB", "en", "en-GB-Standard-C", "Emily", Female),
        voice!("English (UK)", Standard, "en-GB", "en", "en-GB-Standard-D", "Leo", Male),
        voice!("English (UK)", WaveNet, "en-GB", "en", "en-GB-Wavenet-A", "Alice", Female),
        voice!("English (UK)", WaveNet, "en-GB", "en", "en-GB-Wavenet-B", "Jacob", Male),
        voice!("English (UK)", WaveNet, "en-GB", "en", "en-GB-Wavenet-C", "Beatrix", Female),
        voice!("English (UK)", WaveNet, "en-GB", "en", "en-GB-Wavenet-D", "Oscar", Male),
        voice!("English (US)", Standard, "en-US", "en", "en-US-Standard-B", "Liam", Male),
        voice!("English (US)", Standard, "en-US", "en", "en-US-Standard-C", "Emma", Female),
        voice!("English (US)", Standard, "en-US", "en", "en-US-Standard-D", "Mason", Male),
        voice!("English (US)", Standard, "en-US", "en", "en-US-Standard-E", "Grace", Female),
        voice!("English (US)", WaveNet, "en-US", "en", "en-US-Wavenet-A", "Ethan", Male),
        voice!("English (US)", WaveNet, "en-US", "en", "en-US-Wavenet-B", "Ben", Male),
        voice!("English (US)", WaveNet, "en-US", "en", "en-US-Wavenet-C", "Ella", Female),
        voice!("English (US)", WaveNet, "en-US", "en", "en-US-Wavenet-D", "William", Male),
        voice!("English (US)", WaveNet, "en-US", "en", "en-US-Wavenet-E", "Alexis", Female),
        voice!("English (US)", WaveNet, "en-US", "en", "en-US-Wavenet-F", "Sarah", Female),
        voice!("French (France)", Standard, "fr-FR", "fr", "fr-FR-Standard-B", "jean-luc-picard", Male),
        voice!("French (France)", Standard, "fr-FR", "fr", "fr-FR-Standard-C", "Adele", Female),
        voice!("French (France)", Standard, "fr-FR", "fr", "fr-FR-Standard-D", "Adam", Male),
        voice!("French (France)", WaveNet, "fr-FR", "fr", "fr-FR-Wavenet-A", "Jeanne", Female),
        voice!("French (France)", WaveNet, "fr-FR", "fr", "fr-FR-Wavenet-B", "Paul", Male),
        voice!("French (France)", WaveNet, "fr-FR", "fr", "fr-FR-Wavenet-C", "Ines", Female),
        voice!("French (France)", WaveNet, "fr-FR", "fr", "fr-FR-Wavenet-D", "Arthur", Male),
        voice!("French (Canada)", Standard, "fr-CA", "fr", "fr-CA-Standard-A", "Romy", Female),
        voice!("French (Canada)", Standard, "fr-CA", "fr", "fr-CA-Standard-B", "Logan", Male),
        voice!("French (Canada)", Standard, "fr-CA", "fr", "fr-CA-Standard-C", "Rosa", Female),
        voice!("French (Canada)", Standard, "fr-CA", "fr", "fr-CA-Standard-D", "Felix", Male),
        voice!("French (Canada)", WaveNet, "fr-CA", "fr", "fr-CA-Wavenet-A", "Delphine", Female),
        voice!("French (Canada)", WaveNet, "fr-CA", "fr", "fr-CA-Wavenet-B", "Alexandre", Male),
        voice!("French (Canada)", WaveNet, "fr-CA", "fr", "fr-CA-Wavenet-C", "Camille", Female),
        voice!("French (Canada)", WaveNet, "fr-CA", "fr", "fr-CA-Wavenet-D", "George", Male),
        voice!("German", Standard, "de-DE", "de", "de-DE-Standard-A", "Hanna", Female),
        voice!("German", Standard, "de-DE", "de", "de-DE-Standard-B", "Finn", Male),
        voice!("German", WaveNet, "de-DE", "de", "de-DE-Wavenet-A", "Anna", Female),
        voice!("German", WaveNet, "de-DE", "de", "de-DE-Wavenet-B", "Jan", Male),
        voice!("German", WaveNet, "de-DE", "de", "de-DE-Wavenet-C", "Julia", Female),
        voice!("German", WaveNet, "de-DE", "de", "de-DE-Wavenet-D", "Jonas", Male),
        voice!("Italian", Standard, "it-IT", "it", "it-IT-Standard-A", "Greta", Female),
        voice!("Italian", WaveNet, "it-IT", "it", "it-IT-Wavenet-A", "Giulia", Female),
        voice!("Japanese", Standard, "ja-JP", "ja", "ja-JP-Standard-A", "Yui", Female),
        voice!("Japanese", WaveNet, "ja-JP", "ja", "ja-JP-Wavenet-A", "Rio", Female),
        voice!("Korean", Standard, "ko-KR", "ko", "ko-KR-Standard-A", "Ji-woo", Female),
        voice!("Korean", Standard, "ko-KR", "ko", "ko-KR-Standard-B", "Seo-yeon", Female),
        voice!("Korean", Standard, "ko-KR", "ko", "ko-KR-Standard-C", "Ye-jun", Male),
        voice!("Korean", Standard, "ko-KR", "ko", "ko-KR-Standard-D", "Do-yoon", Male),
        voice!("Korean", WaveNet, "ko-KR", "ko", "ko-KR-Wavenet-A", "Seo-yun", Female),
        voice!("Korean", WaveNet, "ko-KR", "ko", "ko-KR-Wavenet-B", "Min-seo", Female),
        voice!("Korean", WaveNet, "ko-KR", "ko", "ko-KR-Wavenet-C", "Hyun-woo", Male),
        voice!("Korean", WaveNet, "ko-KR", "ko", "ko-KR-Wavenet-D", "Gun-woo", Male),
        voice!("Norwegian", Standard, "nb-NO", "nb", "nb-NO-Standard-E", "Hilda", Female),
        voice!("Norwegian", WaveNet, "nb-NO", "nb", "nb-NO-Wavenet-E", "Liv", Female),
        voice!("Polish", Standard, "pl-PL", "pl", "pl-PL-Standard-A", "Ada", Female),
        voice!("Polish", Standard, "pl-PL", "pl", "pl-PL-Standard-B", "Oskar", Male),
        voice!("Polish", Standard, "pl-PL", "pl", "pl-PL-Standard-C", "Robert", Male),
        voice!("Polish", Standard, "pl-PL", "pl", "pl-PL-Standard-D", "Nadia", Female),
        voice!("Polish", Standard, "pl-PL", "pl", "pl-PL-Standard-E", "Danka", Female),
        voice!("Polish", WaveNet, "pl-PL", "pl", "pl-PL-Wavenet-A", "Ela", Female),
        voice!("Polish", WaveNet, "pl-PL", "pl", "pl-PL-Wavenet-B", "Stefan", Male),
        voice!("Polish", WaveNet, "pl-PL", "pl", "pl-PL-Wavenet-C", "Olaf", Male),
        voice!("Polish", WaveNet, "pl-PL", "pl", "pl-PL-Wavenet-D", "Marta", Female),
        voice!("Polish", WaveNet, "pl-PL", "pl", "pl-PL-Wavenet-E", "Wanda", Female),
        voice!("Portugese (Brazil)", Standard, "pt-BR", "pt", "pt-BR-Standard-A", "Maria", Female),
        voice!("Portugese (Brazil)", WaveNet, "pt-BR", "pt", "pt-BR-Wavenet-A", "Helena", Female),
        voice!("Portugese (Portugal)", Standard, "pt-PT", "pt", "pt-PT-Standard-A", "", Female),
        voice!("Portugese (Portugal)", Standard, "pt-PT", "pt", "pt-PT-Standard-B", "", Male),
        voice!("Portugese (Portugal)", Standard, "pt-PT", "pt", "pt-PT-Standard-C", "", Male),
        voice!("Portugese (Portugal)", Standard, "pt-PT", "pt", "pt-PT-Standard-D", "", Female),
        voice!("Portugese (Portugal)", WaveNet, "pt-PT", "pt", "pt-PT-Wavenet-A", "", Female),
        voice!("Portugese (Portugal)", WaveNet, "pt-PT", "pt", "pt-PT-Wavenet-B", "", Male),
        voice!("Portugese (Portugal)", WaveNet, "pt-PT", "pt", "pt-PT-Wavenet-C", "", Male),
        voice!("Portugese (Portugal)", WaveNet, "pt-PT", "pt", "pt-PT-Wavenet-D", "", Female),
        voice!("Russian", Standard, "ru-RU", "ru", "ru-RU-Standard-A", "Diana", Female),
        voice!("Russian", Standard, "ru-RU", "ru", "ru-RU-Standard-B", "Nikola", Male),
        voice!("Russian", Standard, "ru-RU", "ru", "ru-RU-Standard-C", "Nina", Female),
        voice!("Russian", Standard, "ru-RU", "ru", "ru-RU-Standard-D", "Luca", Male),
        voice!("Russian", WaveNet, "ru-RU", "ru", "ru-RU-Wavenet-A", "Tanya", Female),
        voice!("Russian", WaveNet, "ru-RU", "ru", "ru-RU-Wavenet-B", "Boris", Male),
        voice!("Russian", WaveNet, "ru-RU", "ru", "ru-RU-Wavenet-C", "Veronica", Female),
        voice!("Russian", WaveNet, "ru-RU", "ru", "ru-RU-Wavenet-D", "Ivan", Male),
        voice!("Slovak", Standard, "sk-SK", "sk", "sk-SK-Standard-A", "", Female),
        voice!("Slovak", WaveNet, "sk-SK", "sk", "sk-SK-Wavenet-A", "", Female),
        voice!("Spanish", Standard, "es-ES", "es", "es-ES-Standard-A", "Camila", Female),
        voice!("Swedish", Standard, "sv-SE", "sv", "sv-SE-Standard-A", "Ebba", Female),
        voice!("Swedish", WaveNet, "sv-SE", "sv", "sv-SE-Wavenet-A", "Agnes", Female),
        voice!("Turkish", Standard, "tr-TR", "tr", "tr-TR-Standard-A", "Azra", Female),
        voice!("Turkish", Standard, "tr-TR", "tr", "tr-TR-Standard-B", "", Male),
        voice!("Turkish", Standard, "tr-TR", "tr", "tr-TR-Standard-C", "", Female),
        voice!("Turkish", Standard, "tr-TR", "tr", "tr-TR-Standard-D", "", Female),
        voice!("Turkish", Standard, "tr-TR", "tr", "tr-TR-Standard-E", "", Male),
        voice!("Turkish", WaveNet, "tr-TR", "tr", "tr-TR-Wavenet-A", "Ecrin", Female),
        voice!("Turkish", WaveNet, "tr-TR", "tr", "tr-TR-Wavenet-B", "", Male),
        voice!("Turkish", WaveNet, "tr-TR", "tr", "tr-TR-Wavenet-C", "", Female),
        voice!("Turkish", WaveNet, "tr-TR", "tr", "tr-TR-Wavenet-D", "", Female),
        voice!("Turkish", WaveNet, "tr-TR", "tr", "tr-TR-Wavenet-E", "", Male),
        voice!("Ukranian", Standard, "uk-UA", "uk", "uk-UA-Standard-A", "Katya", Female),
        voice!("Ukranian", WaveNet, "uk-UA", "uk", "uk-UA-Wavenet-A", "Elina", Female),
    ]
}
