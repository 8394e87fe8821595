use std::path::PathBuf;
use ndarray as nd;
use whooie::{ mkdir, write_npz };
use sqwell::{ config::ScatterConfig, grid::Grid, scatter, units };

// 50 eV electron incident on a 10 eV deep, 2 Å wide well

fn main() -> anyhow::Result<()> {
    let config = ScatterConfig::default();
    let sc = scatter::solve_scatter(&config)?;
    let k = sc.get_k();
    let amps = sc.get_amps();

    println!("k_left  = {:.6e} m⁻¹", k.left);
    println!("k_well  = {:.6e} m⁻¹", k.well);
    println!("B_left  = {:.6}", amps.b_left);
    println!("A_well  = {:.6}", amps.a_well);
    println!("B_well  = {:.6}", amps.b_well);
    println!("A_right = {:.6}", amps.a_right);
    println!("T = {:.8}, R = {:.8}", sc.transmission(), sc.reflection());
    println!("T (closed form) = {:.8}", scatter::transmission_exact(&config)?);

    let grid = Grid::symmetric(8.0 * config.half_width, 1000)?;
    let sampled = sc.sample(grid.get_x())?;
    let v: nd::Array1<f64> = sc.potential(&grid).mapv(|vk| vk / units::e);
    let amps_re: nd::Array1<f64>
        = nd::array![amps.b_left.re, amps.a_well.re, amps.b_well.re, amps.a_right.re];
    let amps_im: nd::Array1<f64>
        = nd::array![amps.b_left.im, amps.a_well.im, amps.b_well.im, amps.a_right.im];

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    write_npz!(
        outdir.join("scatter.npz"),
        arrays: {
            "x" => grid.get_x(),
            "v" => &v,
            "x_left" => &sampled.left.x,
            "psi_left" => &sampled.left.psi,
            "x_well" => &sampled.well.x,
            "psi_well" => &sampled.well.psi,
            "x_right" => &sampled.right.x,
            "psi_right" => &sampled.right.psi,
            "amps_re" => &amps_re,
            "amps_im" => &amps_im,
            "t" => &nd::array![sc.transmission()],
            "r" => &nd::array![sc.reflection()],
        }
    );
    Ok(())
}
