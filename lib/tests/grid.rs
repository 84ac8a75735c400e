use lifestep_lib::{Error, Grid, ReadGrid, ALIVE, DEAD};

#[test]
fn allocation_failure() {
    assert!(matches!(Grid::new(usize::MAX), Err(Error::Allocation(_))));
    #[cfg(target_pointer_width = "64")]
    assert!(matches!(Grid::new(1 << 32), Err(Error::Allocation(_))));
}

#[test]
fn dimension_mismatch() {
    assert_eq!(
        Grid::from_plaintext("oo\no", 'o'),
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        Grid::from_plaintext("o\no", 'o'),
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn from_rows() -> Result<(), Error> {
    let grid = Grid::from_rows(vec![vec![ALIVE, DEAD], vec![DEAD, DEAD]])?;
    assert_eq!(grid.size(), 2);
    assert_eq!(grid.population(), 1);
    assert_eq!(grid.plaintext('x', ' '), "x \n  \n");
    Ok(())
}
