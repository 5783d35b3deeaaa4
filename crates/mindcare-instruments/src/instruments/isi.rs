use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// ISI: Insomnia Severity Index.
///
/// The published scale rates items 0–4 (total 28). Answers here use the
/// shared 0–3 scale, so the maximum is 21 and the top tier is unreachable.
pub fn isi() -> Instrument {
    Instrument::new(
        "isi",
        "ISI - Insomnia Severity Index",
        "Gangguan Tidur",
        &[
            "Kesulitan tidur (sulit memulai tidur)?",
            "Kesulitan mempertahankan tidur (sering terbangun)?",
            "Bangun terlalu pagi dan tidak bisa tidur kembali?",
            "Seberapa puas Anda dengan pola tidur Anda saat ini?",
            "Seberapa banyak tidur Anda mengganggu fungsi harian Anda?",
            "Seberapa mencolok gangguan tidur Anda bagi orang lain?",
            "Seberapa khawatir Anda tentang masalah tidur Anda saat ini?",
        ],
        vec![
            ScoreBand::upto(7, "Tidak mengalami insomnia", Severity::Minimal),
            ScoreBand::upto(14, "Insomnia ringan", Severity::Mild),
            ScoreBand::upto(21, "Insomnia sedang", Severity::Moderate),
            ScoreBand::above("Insomnia berat", Severity::Severe),
        ],
    )
}
