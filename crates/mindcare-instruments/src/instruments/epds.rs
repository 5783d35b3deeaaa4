use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// EPDS: Edinburgh Postnatal Depression Scale.
/// 10 items. Scores of 13 or more suggest probable postnatal depression.
pub fn epds() -> Instrument {
    Instrument::new(
        "epds",
        "EPDS - Edinburgh Postnatal Depression Scale",
        "Depresi",
        &[
            "Saya dapat tertawa dan melihat sisi lucu dari sesuatu?",
            "Saya menantikan sesuatu dengan gembira?",
            "Saya menyalahkan diri sendiri tanpa perlu ketika ada yang salah?",
            "Saya merasa cemas atau khawatir tanpa alasan yang jelas?",
            "Saya merasa takut atau panik tanpa alasan yang jelas?",
            "Hal-hal menumpuk dan saya tidak bisa mengatasinya?",
            "Saya merasa sangat tidak bahagia sehingga sulit tidur?",
            "Saya merasa sedih atau sengsara?",
            "Saya sangat tidak bahagia sehingga saya menangis?",
            "Pikiran untuk menyakiti diri sendiri telah terjadi pada saya?",
        ],
        vec![
            ScoreBand::upto(9, "Tidak mengalami depresi postnatal", Severity::Minimal),
            ScoreBand::upto(12, "Kemungkinan depresi postnatal ringan", Severity::Mild),
            ScoreBand::above("Kemungkinan depresi postnatal sedang-berat", Severity::ModeratelySevere),
        ],
    )
}
