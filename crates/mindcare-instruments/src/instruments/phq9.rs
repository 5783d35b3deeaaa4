use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub fn phq9() -> Instrument {
    Instrument::new(
        "phq9",
        "PHQ-9 - Skrining Depresi",
        "Depresi",
        &[
            "Kehilangan minat atau kesenangan dalam melakukan sesuatu?",
            "Merasa murung, depresi, atau putus asa?",
            "Kesulitan tidur atau tidur berlebihan?",
            "Merasa lelah atau kekurangan energi?",
            "Nafsu makan menurun atau meningkat?",
            "Merasa buruk tentang diri sendiri — bahwa Anda gagal atau mengecewakan keluarga Anda?",
            "Kesulitan berkonsentrasi, misalnya membaca koran atau menonton TV?",
            "Bergerak atau berbicara sangat lambat atau terlalu gelisah?",
            "Pikiran bahwa lebih baik mati atau menyakiti diri sendiri?",
        ],
        vec![
            ScoreBand::upto(4, "Minimal / Tidak ada depresi", Severity::Minimal),
            ScoreBand::upto(9, "Depresi ringan", Severity::Mild),
            ScoreBand::upto(14, "Depresi sedang", Severity::Moderate),
            ScoreBand::upto(19, "Depresi sedang berat", Severity::ModeratelySevere),
            ScoreBand::above("Depresi berat", Severity::Severe),
        ],
    )
}
