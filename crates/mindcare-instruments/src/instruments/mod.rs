//! Instrument definitions shipped with the standard catalog.

pub mod audit;
pub mod bai;
pub mod bdi;
pub mod dass;
pub mod epds;
pub mod gad7;
pub mod isi;
pub mod oci_r;
pub mod pcl5;
pub mod phq9;
pub mod stress_check;

use crate::Instrument;

/// The standard instruments, in the order they are offered to respondents.
pub fn standard() -> Vec<Instrument> {
    vec![
        phq9::phq9(),
        bdi::bdi(),
        epds::epds(),
        gad7::gad7(),
        bai::bai(),
        dass::dass(),
        stress_check::stress_check(),
        isi::isi(),
        pcl5::pcl5(),
        audit::audit(),
        oci_r::oci_r(),
    ]
}
