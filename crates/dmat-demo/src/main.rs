//! Scripted console walkthrough of the `dmat` matrix API.

use dmat::{Matrix, Result};

fn main() -> Result<()> {
    let mut m1: Matrix<f64> = Matrix::new(2, 2);
    println!("Row Count: {}", m1.rows());
    println!("Column Count: {}", m1.cols());

    let mut m2: Matrix<f64> = Matrix::new(2, 2);
    print!("{}", m1.fill_ones());
    print!("{}", m2.fill_ones());
    m2[(0, 1)] = 10.5;
    println!("{}", m2[(0, 1)]);

    m2 *= 7.0;

    print!("{}", &m2 * 7.0);
    print!("{}", 8.0 * &m2);

    let m4 = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
    println!("m4 * m4");
    print!("{}", &m4 * &m4);

    let mut m5: Matrix<f64> = Matrix::new(2, 1);
    m5.set_elements(&[7.5, 10.8])?;
    print!("{m5}");

    let mut m6 = Matrix::from_vec(
        3,
        3,
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
    )?;
    println!("m6");
    print!("{m6}");
    print!("{}", m6.transpose());

    let mut m7 = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0])?;
    println!("m7");
    print!("{m7}");
    print!("{}", m7.transpose());

    println!("Is Addition Legal: {}", m1.is_add_compatible(&m2));

    let ones = m1.clone();
    m1 += &ones;
    println!("m1 + m2");
    print!("{}", &m1 + &m2);
    println!("m2 - m2");
    print!("{}", &m2 - &m2);
    println!("m1 * m2");
    print!("{}", &m1 * &m2);

    println!("m1 != m2: {}", m1 != m2);
    println!("m1 == m2: {}", m1 == m2);

    m1.fill_ones();

    println!("m1 != m2: {}", m1 != m2);
    println!("m1 == m2: {}", m1 == m2);

    let mut m3: Matrix<f64> = Matrix::new(10, 10);
    m3.fill_ones();

    println!("Is Addition Legal: {}", m1.is_add_compatible(&m3));

    m3.set_row(0, &[22.0, 33.0, 44.0, 55.0])?;
    m3.set_col(9, &[66.0, 77.0, 88.0, 99.0])?;
    print!("{m3}");
    if m1.is_add_compatible(&m3) {
        m3 += &m1;
    }

    Ok(())
}
