
/// This module contains functionality related to generating the GPS L1 C/A
/// spreading codes and rendering them for downstream consumers
pub mod signal_modulation;


use num_complex::Complex;

use crate::CodeGenErr;

pub const CODE_LENGTH:usize = 1023;
pub const CHIPS_PER_SEC:f64 = 1.023e6;
pub const SEC_PER_CHIP:f64 = 1.0 / CHIPS_PER_SEC;

// One code period per millisecond
pub const CODES_PER_SEC:f64 = 1000.0;

pub fn prn_int(prn:usize) -> Result<Vec<i8>, CodeGenErr> {
	let code = signal_modulation::ca_code(prn)?;
	Ok(code.iter().map(|chip| if *chip { -1i8 } else { 1i8 }).collect())
}

pub fn prn_complex(prn:usize) -> Result<Vec<Complex<f64>>, CodeGenErr> {
	Ok(prn_int(prn)?.iter().map(|x| Complex{ re: *x as f64, im: 0.0 }).collect())
}

pub fn prn_int_sampled(prn:usize, fs:f64) -> Result<Vec<i8>, CodeGenErr> {
	let samples_per_code:usize = (fs / CODES_PER_SEC) as usize;
	let ts:f64 = 1.0 / fs;

	let code = prn_int(prn)?;

	Ok((0..samples_per_code).map(|i| {
		let code_value_idx:usize = ((ts * ((i+1) as f64)) / SEC_PER_CHIP) as usize;
		if code_value_idx >= CODE_LENGTH { code[CODE_LENGTH-1] } else { code[code_value_idx] }
	}).collect())
}

pub fn prn_complex_sampled(prn:usize, fs:f64) -> Result<Vec<Complex<f64>>, CodeGenErr> {
	let samples_per_code:usize = (fs / CODES_PER_SEC) as usize;
	let ts:f64 = 1.0 / fs;

	let code = prn_complex(prn)?;

	Ok((0..samples_per_code).map(|i| {
		let code_value_idx:usize = ((ts * ((i+1) as f64)) / SEC_PER_CHIP) as usize;
		if code_value_idx >= CODE_LENGTH { code[CODE_LENGTH-1] } else { code[code_value_idx] }
	}).collect())
}
