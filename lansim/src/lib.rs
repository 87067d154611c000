//! Prebuilt simulations and the command line front end for the
//! [`lansim_core`] network simulator.

pub mod cli;
pub mod simulations;
