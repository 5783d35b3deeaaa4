use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// DASS-21: Depression Anxiety Stress Scales, short form.
/// Scored here as a single combined total across all 21 items.
pub fn dass() -> Instrument {
    Instrument::new(
        "dass",
        "DASS-21 - Depression Anxiety Stress Scale",
        "Stres",
        &[
            "Sulit untuk bersantai?",
            "Mulut terasa kering?",
            "Tidak dapat merasakan perasaan positif sama sekali?",
            "Mengalami kesulitan bernapas?",
            "Sulit untuk memulai melakukan sesuatu?",
            "Cenderung bereaksi berlebihan terhadap situasi?",
            "Mengalami gemetar (misalnya di tangan)?",
            "Merasa menggunakan banyak energi nervous?",
            "Khawatir tentang situasi di mana saya mungkin panik?",
            "Merasa tidak ada yang bisa dinanti-nantikan?",
            "Merasa gelisah?",
            "Sulit untuk bersabar?",
            "Merasa sedih dan depresi?",
            "Tidak toleran terhadap apa pun yang menghentikan saya?",
            "Merasa hampir panik?",
            "Tidak dapat antusias tentang apa pun?",
            "Merasa tidak berharga sebagai seseorang?",
            "Merasa agak sensitif?",
            "Menyadari aksi jantung tanpa olahraga fisik?",
            "Merasa takut tanpa alasan yang baik?",
            "Merasa hidup tidak berarti?",
        ],
        vec![
            ScoreBand::upto(14, "Normal", Severity::Minimal),
            ScoreBand::upto(21, "Ringan", Severity::Mild),
            ScoreBand::upto(28, "Sedang", Severity::Moderate),
            ScoreBand::upto(42, "Berat", Severity::Severe),
            ScoreBand::above("Sangat berat", Severity::ExtremelySevere),
        ],
    )
}
