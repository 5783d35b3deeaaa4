use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// AUDIT: Alcohol Use Disorders Identification Test (WHO).
pub fn audit() -> Instrument {
    Instrument::new(
        "audit",
        "AUDIT - Alcohol Use Disorder Identification Test",
        "Penyalahgunaan Zat",
        &[
            "Seberapa sering Anda minum alkohol?",
            "Berapa banyak minuman beralkohol yang Anda konsumsi pada hari biasa?",
            "Seberapa sering Anda minum 6 atau lebih minuman dalam satu kesempatan?",
            "Seberapa sering dalam setahun terakhir Anda tidak dapat berhenti minum?",
            "Seberapa sering Anda gagal melakukan apa yang diharapkan karena minum?",
            "Seberapa sering Anda perlu minum di pagi hari untuk merasa baik?",
            "Seberapa sering Anda merasa bersalah atau menyesal setelah minum?",
            "Seberapa sering Anda tidak dapat mengingat apa yang terjadi karena minum?",
            "Apakah Anda atau orang lain pernah terluka karena minum Anda?",
            "Apakah ada yang menyarankan Anda mengurangi minum?",
        ],
        vec![
            ScoreBand::upto(7, "Konsumsi alkohol berisiko rendah", Severity::Minimal),
            ScoreBand::upto(15, "Konsumsi alkohol berisiko sedang", Severity::Moderate),
            ScoreBand::upto(19, "Konsumsi alkohol berbahaya", Severity::Severe),
            ScoreBand::above("Kemungkinan ketergantungan alkohol", Severity::ExtremelySevere),
        ],
    )
}
