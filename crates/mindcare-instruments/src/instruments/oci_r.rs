use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// OCI-R: Obsessive-Compulsive Inventory, Revised.
/// 18 items.
pub fn oci_r() -> Instrument {
    Instrument::new(
        "oci",
        "OCI-R - Obsessive Compulsive Inventory-Revised",
        "OCD (Obsessive Compulsive)",
        &[
            "Saya memiliki pikiran yang menyelamatkan saya dari bahaya?",
            "Saya memeriksa hal-hal lebih dari yang diperlukan?",
            "Saya takut jika saya tidak hati-hati, saya akan terluka atau sakit?",
            "Saya kesulitan mengendalikan pikiran saya sendiri?",
            "Saya mencuci tangan saya lebih dari yang diperlukan?",
            "Saya mengumpulkan hal-hal yang tidak saya butuhkan?",
            "Saya memeriksa berulang-ulang bahwa pintu terkunci?",
            "Saya merasa perlu mengulangi angka tertentu?",
            "Kadang saya takut saya mungkin menyakiti seseorang?",
            "Saya khawatir tentang kuman dan penyakit?",
            "Saya dapat dengan mudah membuang hal-hal yang tidak saya butuhkan?",
            "Saya memeriksa berulang-ulang bahwa alat listrik dimatikan?",
            "Saya perlu melakukan sesuatu berulang-ulang sampai terasa benar?",
            "Saya khawatir saya mungkin bertindak impulsif?",
            "Saya khawatir saya akan terkontaminasi jika menyentuh sesuatu?",
            "Saya kesulitan membuang hal-hal karena saya mungkin membutuhkannya?",
            "Saya memeriksa berulang-ulang bahwa saya tidak membuat kesalahan?",
            "Saya takut pikiran buruk atau menakutkan saya?",
        ],
        vec![
            ScoreBand::upto(20, "Gejala OCD minimal", Severity::Minimal),
            ScoreBand::upto(30, "Gejala OCD ringan", Severity::Mild),
            ScoreBand::upto(40, "Gejala OCD sedang", Severity::Moderate),
            ScoreBand::above("Gejala OCD berat", Severity::Severe),
        ],
    )
}
