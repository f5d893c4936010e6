use crate::format::{OutputRecord, render_integral};

#[test]
fn output_record_renders_tab_separated() {
    assert_eq!(OutputRecord::new(3.0, 150.5).to_string(), "3\t150.5");
    assert_eq!(OutputRecord::new(-7.0, 200.0).to_string(), "-7\t200.0");
    assert_eq!(OutputRecord::new(0.0, 1e20).to_string(), "0\t1e+20");
}

#[test]
fn huge_popularity_renders_every_digit() {
    assert_eq!(
        OutputRecord::new(1e20, 1.0).to_string(),
        "100000000000000000000\t1.0"
    );
    assert_eq!(render_integral(-1e19), "-10000000000000000000");
}

#[test]
fn negative_zero_popularity_renders_as_zero() {
    assert_eq!(OutputRecord::new(-0.0, 2.0).to_string(), "0\t2.0");
    assert_eq!(render_integral(-0.0), "0");
}
