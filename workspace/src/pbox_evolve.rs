use std::path::PathBuf;
use log::info;
use ndarray as nd;
use num_complex::Complex64 as C64;
use whooie::{ mkdir, write_npz };
use pbox::{
    grid::{ SpatialGrid, TimeGrid },
    model,
    plot::{ anim, evolve::TimeEvolution, FigureSize },
    timedep,
    PhysicalConstants,
    QuantumNumber,
};

// natural units: L = ħ = m = 1
const BOX_LENGTH: f64 = 1.0;
const HBAR: f64 = 1.0;
const MASS: f64 = 1.0;
const GRID_POINTS: usize = pbox::DEF_GRID_POINTS;
const TIME_POINTS: usize = pbox::DEF_TIME_POINTS;
const N_MAX: u32 = pbox::DEF_N_MAX;
const FPS: u32 = 30;
const FIG_SIZE: (f64, f64) = (10.0, 15.0); // in
const DPI: u32 = 80;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let consts = PhysicalConstants::new(BOX_LENGTH, HBAR, MASS)?;
    let grid = SpatialGrid::new(&consts, GRID_POINTS)?;
    // two full periods of the ground state
    let tgrid = TimeGrid::two_periods(&consts, TIME_POINTS)?;
    let t_nat: f64 = consts.units().to_nat_time(tgrid.t_max());
    info!("t_max = {:.4} ({:.4} natural time units)", tgrid.t_max(), t_nat);

    let outdir = PathBuf::from("output");
    mkdir!(outdir);
    let evolution
        = TimeEvolution::new(consts, grid.clone(), tgrid.clone(), N_MAX)?
        .with_frame_delay(1000 / FPS);
    anim::save_gif(
        &evolution,
        outdir.join("full_wavefunction_animation.gif"),
        FigureSize::new(FIG_SIZE.0, FIG_SIZE.1, DPI),
    )?;

    let energies: nd::Array1<f64> = model::energies(&consts, N_MAX);
    let q: nd::Array2<C64>
        = timedep::evolve(&consts, QuantumNumber::GROUND, grid.x(), tgrid.t());
    let drift
        = timedep::norms(&q, grid.dx()).iter()
        .map(|nk| (nk - 1.0).abs())
        .fold(0.0, f64::max);
    info!("ground state norm drift over the run: {:.2e}", drift);

    write_npz!(
        outdir.join("full_wavefunction_animation.npz"),
        arrays: {
            "x" => grid.x(),
            "t" => tgrid.t(),
            "e" => &energies,
            "q" => &q,
        }
    );
    Ok(())
}
