//! Bilingual message catalog.
//!
//! Every user-facing string is a fixed English / Bahasa Indonesia pair,
//! resolved by `(MessageKey, Language)`. There is no external translation
//! lookup and no pluralization; the pairs are enumerated in full.

use crate::models::Language;

/// Keys for every user-facing message in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AssessmentSummary,
    EmailLabel,
    LanguageLabel,
    LanguageName,
    DateLabel,
    ResultsOverview,
    AnswerYes,
    AnswerNo,
    AnswerNa,
    TotalQuestions,
    CompletionRate,
    AnswerLabel,
    RemarksLabel,
    LoadingResults,
    LoadFailed,
    GoHome,
    Downloading,
    ExportFailed,
    ExportSaved,
    CertificationHeading,
    CertificationBody,
    StartCertification,
    StartAcademy,
    ViewBadges,
    RequestAccessCode,
    AccessPrompt,
    EmailRequired,
    Sending,
    AccessConfirmation,
    AccessFailed,
    ReminderTitle,
    ReminderBody,
    AccessAcademy,
    FooterNote,
}

impl MessageKey {
    /// The enumerated (English, Bahasa Indonesia) pair for this key.
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            MessageKey::AssessmentSummary => ("Assessment Summary", "Ringkasan Penilaian"),
            MessageKey::EmailLabel => ("Email", "Email"),
            MessageKey::LanguageLabel => ("Language", "Bahasa"),
            MessageKey::LanguageName => ("English", "Bahasa Indonesia"),
            MessageKey::DateLabel => ("Date", "Tanggal"),
            MessageKey::ResultsOverview => ("Results Overview", "Ikhtisar Hasil"),
            MessageKey::AnswerYes => ("Yes", "Ya"),
            MessageKey::AnswerNo => ("No", "Tidak"),
            MessageKey::AnswerNa => ("N/A", "N/A"),
            MessageKey::TotalQuestions => ("Total Questions", "Total Pertanyaan"),
            MessageKey::CompletionRate => ("Completion Rate", "Tingkat Penyelesaian"),
            MessageKey::AnswerLabel => ("Answer", "Jawaban"),
            MessageKey::RemarksLabel => ("Remarks", "Keterangan"),
            MessageKey::LoadingResults => ("Loading your results...", "Memuat hasil Anda..."),
            MessageKey::LoadFailed => (
                "Failed to load response data. Please try again.",
                "Gagal memuat data respons. Silakan coba lagi.",
            ),
            MessageKey::GoHome => ("Go Home", "Kembali ke Beranda"),
            MessageKey::Downloading => ("Downloading...", "Mengunduh..."),
            MessageKey::ExportFailed => (
                "Failed to download PDF. Please try again.",
                "Gagal mengunduh PDF. Silakan coba lagi.",
            ),
            MessageKey::ExportSaved => ("Report saved to", "Laporan disimpan ke"),
            MessageKey::CertificationHeading => (
                "Next Step: Keep learning, get certified with a Credly badge",
                "Langkah Selanjutnya: Terus belajar, dapatkan sertifikasi dengan lencana Credly",
            ),
            MessageKey::CertificationBody => (
                "Take your skills further with the official Siemens Solid Edge Certification and enhance your knowledge with free training via Siemens Xcelerator Academy.",
                "Tingkatkan keterampilan Anda dengan Sertifikasi Siemens Solid Edge resmi dan tingkatkan pengetahuan Anda dengan pelatihan gratis melalui Siemens Xcelerator Academy.",
            ),
            MessageKey::StartCertification => ("Start Certification", "Mulai Sertifikasi"),
            MessageKey::StartAcademy => (
                "Start Solid Edge Online Learning",
                "Mulai Pembelajaran Solid Edge Online",
            ),
            MessageKey::ViewBadges => ("View Credly Badges", "Lihat Lencana Credly"),
            MessageKey::RequestAccessCode => (
                "Request Free Access Code",
                "Minta Kode Akses Gratis",
            ),
            MessageKey::AccessPrompt => (
                "We'll send you a free access code for Siemens Xcelerator Academy training.",
                "Kami akan mengirimkan kode akses gratis untuk pelatihan Siemens Xcelerator Academy.",
            ),
            MessageKey::EmailRequired => (
                "Email address is required.",
                "Alamat email wajib diisi.",
            ),
            MessageKey::Sending => ("Sending...", "Mengirim..."),
            MessageKey::AccessConfirmation => (
                "Thanks! We'll email your access code shortly.",
                "Terima kasih! Kami akan mengirimkan kode akses Anda segera.",
            ),
            MessageKey::AccessFailed => (
                "Failed to submit request. Please try again.",
                "Gagal mengirim permintaan. Silakan coba lagi.",
            ),
            MessageKey::ReminderTitle => (
                "Don't miss this opportunity!",
                "Jangan lewatkan kesempatan ini!",
            ),
            MessageKey::ReminderBody => (
                "Get certified and level up your CAD skills! You can come back anytime, or start now while it's fresh.",
                "Dapatkan sertifikasi dan tingkatkan keterampilan CAD Anda! Anda dapat kembali kapan saja, atau mulai sekarang selagi masih segar.",
            ),
            MessageKey::AccessAcademy => ("Access Academy", "Akses Academy"),
            MessageKey::FooterNote => (
                "This assessment was completed using the Solid Edge Success Criteria Checklist tool.",
                "Penilaian ini diselesaikan menggunakan alat Solid Edge Success Criteria Checklist.",
            ),
        }
    }
}

/// Resolve a message key to its text in the given language.
pub fn text(key: MessageKey, language: Language) -> &'static str {
    let (en, id) = key.pair();
    match language {
        Language::En => en,
        Language::Id => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_languages_resolve() {
        assert_eq!(
            text(MessageKey::AssessmentSummary, Language::En),
            "Assessment Summary"
        );
        assert_eq!(
            text(MessageKey::AssessmentSummary, Language::Id),
            "Ringkasan Penilaian"
        );
    }

    #[test]
    fn test_answer_labels() {
        assert_eq!(text(MessageKey::AnswerYes, Language::Id), "Ya");
        assert_eq!(text(MessageKey::AnswerNo, Language::Id), "Tidak");
        // N/A is not translated in either language.
        assert_eq!(text(MessageKey::AnswerNa, Language::En), "N/A");
        assert_eq!(text(MessageKey::AnswerNa, Language::Id), "N/A");
    }

    #[test]
    fn test_branded_strings_kept_verbatim() {
        assert_eq!(
            text(MessageKey::CertificationBody, Language::En),
            "Take your skills further with the official Siemens Solid Edge Certification and enhance your knowledge with free training via Siemens Xcelerator Academy."
        );
        assert_eq!(
            text(MessageKey::AccessPrompt, Language::Id),
            "Kami akan mengirimkan kode akses gratis untuk pelatihan Siemens Xcelerator Academy."
        );
        assert_eq!(
            text(MessageKey::FooterNote, Language::En),
            "This assessment was completed using the Solid Edge Success Criteria Checklist tool."
        );
    }

    #[test]
    fn test_no_empty_messages() {
        let keys = [
            MessageKey::LoadFailed,
            MessageKey::ExportFailed,
            MessageKey::AccessConfirmation,
            MessageKey::AccessFailed,
            MessageKey::ReminderTitle,
            MessageKey::ReminderBody,
            MessageKey::EmailRequired,
        ];
        for key in keys {
            assert!(!text(key, Language::En).is_empty());
            assert!(!text(key, Language::Id).is_empty());
        }
    }
}
