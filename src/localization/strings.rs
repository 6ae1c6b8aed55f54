use std::collections::HashMap;

lazy_static::lazy_static! {
    pub static ref ENGLISH_STRINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // Risk levels
        m.insert("risk_level_low", "LOW");
        m.insert("risk_level_medium", "MEDIUM");
        m.insert("risk_level_high", "HIGH");

        // Safety badge
        m.insert("safety_analyzing", "Analyzing path safety...");
        m.insert("safety_safe", "Looks safe to delete");
        m.insert("safety_medium", "Proceed with caution");
        m.insert("safety_high", "Dangerous to delete!");

        // Fixed classifier messages
        m.insert("analysis_skipped", "API Key not configured. Skipping AI analysis.");
        m.insert("analysis_failed", "Error communicating with AI. Please check manually.");

        // Section headers
        m.insert("section_safety_check", "AI SAFETY CHECK");
        m.insert("section_preview", "Preview");
        m.insert("section_registry", "Add to Context Menu");

        // Labels
        m.insert("label_path", "Target path");
        m.insert("label_script_type", "Script type");
        m.insert("label_saved", "Saved");
        m.insert("variant_powershell_desc", "Recommended. Handles long paths and folders reliably.");
        m.insert("variant_batch_desc", "Classic Command Prompt script for older systems.");
        m.insert("registry_note", "Double-click AddContextMenu.reg and confirm to add \"Force Delete\" to the right-click menu.");

        m
    };

    pub static ref PERSIAN_STRINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // Risk levels
        m.insert("risk_level_low", "کم");
        m.insert("risk_level_medium", "متوسط");
        m.insert("risk_level_high", "زیاد");

        // Safety badge
        m.insert("safety_analyzing", "در حال بررسی امنیت مسیر...");
        m.insert("safety_safe", "حذف آن بی‌خطر به نظر می‌رسد");
        m.insert("safety_medium", "با احتیاط ادامه دهید");
        m.insert("safety_high", "حذف این مسیر خطرناک است!");

        // Fixed classifier messages
        m.insert("analysis_skipped", "کلید API تنظیم نشده است. تحلیل هوش مصنوعی نادیده گرفته شد.");
        m.insert("analysis_failed", "خطا در ارتباط با هوش مصنوعی. لطفا خودتان بررسی کنید.");

        // Section headers
        m.insert("section_safety_check", "بررسی ایمنی با هوش مصنوعی");
        m.insert("section_preview", "پیش‌نمایش");
        m.insert("section_registry", "افزودن به منوی راست‌کلیک");

        // Labels
        m.insert("label_path", "مسیر هدف");
        m.insert("label_script_type", "نوع اسکریپت");
        m.insert("label_saved", "ذخیره شد");
        m.insert("variant_powershell_desc", "پیشنهادی. مسیرهای طولانی و پوشه‌ها را به‌خوبی مدیریت می‌کند.");
        m.insert("variant_batch_desc", "اسکریپت کلاسیک خط فرمان برای سیستم‌های قدیمی‌تر.");
        m.insert("registry_note", "روی AddContextMenu.reg دوبار کلیک کرده و تأیید کنید تا گزینه «Force Delete» به منوی راست‌کلیک اضافه شود.");

        m
    };
}
