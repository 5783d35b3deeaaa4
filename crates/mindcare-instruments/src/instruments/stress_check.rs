use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// General stress screening checklist. Not a published instrument.
pub fn stress_check() -> Instrument {
    Instrument::new(
        "stres-check",
        "Skrining Stres",
        "Stres",
        &[
            "Merasa kewalahan dengan tanggung jawab?",
            "Sulit tidur karena pikiran yang tidak berhenti?",
            "Mudah tersinggung atau marah pada hal kecil?",
            "Merasa lelah meskipun sudah cukup tidur?",
            "Kehilangan nafsu makan atau makan berlebihan?",
            "Sulit berkonsentrasi pada pekerjaan?",
            "Merasa tegang di leher atau bahu?",
            "Menghindari aktivitas sosial?",
            "Merasa tidak dapat mengatasi masalah?",
            "Mengalami sakit kepala sering?",
        ],
        vec![
            ScoreBand::upto(10, "Stres minimal", Severity::Minimal),
            ScoreBand::upto(20, "Stres sedang", Severity::Moderate),
            ScoreBand::above("Stres tinggi", Severity::Severe),
        ],
    )
}
