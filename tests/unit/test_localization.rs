use forcedel::localization::{LocaleDetector, LocalizedStrings};
use forcedel::{OutputLanguage, RiskLevel, ScriptVariant, TextDirection};

#[test]
fn fixed_messages_match_both_languages() {
    let en = LocalizedStrings::new(OutputLanguage::English);
    let fa = LocalizedStrings::new(OutputLanguage::Persian);

    assert_eq!(en.skipped_message(), "API Key not configured. Skipping AI analysis.");
    assert_eq!(en.failed_message(), "Error communicating with AI. Please check manually.");
    assert_eq!(
        fa.skipped_message(),
        "کلید API تنظیم نشده است. تحلیل هوش مصنوعی نادیده گرفته شد."
    );
    assert_eq!(
        fa.failed_message(),
        "خطا در ارتباط با هوش مصنوعی. لطفا خودتان بررسی کنید."
    );
}

#[test]
fn every_risk_level_has_a_title() {
    for lang in [OutputLanguage::English, OutputLanguage::Persian] {
        let strings = LocalizedStrings::new(lang);
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert!(!strings.get_risk_title(&level).is_empty());
            assert!(!strings.get_risk_level(&level).is_empty());
        }
        for variant in [ScriptVariant::PowerShell, ScriptVariant::Batch] {
            assert!(!strings.get_variant_description(&variant).is_empty());
        }
    }
}

#[test]
fn persian_is_right_to_left() {
    assert_eq!(OutputLanguage::Persian.direction(), TextDirection::Rtl);
    assert_eq!(OutputLanguage::English.direction(), TextDirection::Ltr);
    assert_eq!(OutputLanguage::English.toggle(), OutputLanguage::Persian);
    assert_eq!(OutputLanguage::Persian.toggle(), OutputLanguage::English);
}

#[test]
fn locale_detection_uses_lookup() {
    let detected = LocaleDetector::detect_with(|var| match var {
        "LANG" => Some("fa_IR.UTF-8".to_string()),
        _ => None,
    });
    assert_eq!(detected, OutputLanguage::Persian);

    let detected = LocaleDetector::detect_with(|_| None);
    assert_eq!(detected, OutputLanguage::English);
}
