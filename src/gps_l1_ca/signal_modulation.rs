
use crate::CodeGenErr;

use super::CODE_LENGTH;

// Given in IS-GPS-200H, Table 3-Ia: the pair of G2 stages whose modulo-2 sum
// forms the delayed G2i sequence for each satellite
const G2_OUTPUT_TAPS:[[usize; 2]; 32] = [
	[2,  6],	// PRN 01
	[3,  7],	// PRN 02
	[4,  8],	// PRN 03
	[5,  9],	// PRN 04
	[1,  9],	// PRN 05
	[2, 10],	// PRN 06
	[1,  8],	// PRN 07
	[2,  9],	// PRN 08
	[3, 10],	// PRN 09
	[2,  3],	// PRN 10
	[3,  4],	// PRN 11
	[5,  6],	// PRN 12
	[6,  7],	// PRN 13
	[7,  8],	// PRN 14
	[8,  9],	// PRN 15
	[9, 10],	// PRN 16
	[1,  4],	// PRN 17
	[2,  5],	// PRN 18
	[3,  6],	// PRN 19
	[4,  7],	// PRN 20
	[5,  8],	// PRN 21
	[6,  9],	// PRN 22
	[1,  3],	// PRN 23
	[4,  6],	// PRN 24
	[5,  7],	// PRN 25
	[6,  8],	// PRN 26
	[7,  9],	// PRN 27
	[8, 10],	// PRN 28
	[1,  6],	// PRN 29
	[2,  7],	// PRN 30
	[3,  8],	// PRN 31
	[4,  9],	// PRN 32
	];

// G1 = X^10 + X^3 + 1, output from stage 10
const G1_FEEDBACK_TAPS:[usize; 2] = [3, 10];
const G1_OUTPUT_TAPS:[usize; 1] = [10];

// G2 = X^10 + X^9 + X^8 + X^6 + X^3 + X^2 + 1, output per G2_OUTPUT_TAPS
const G2_FEEDBACK_TAPS:[usize; 6] = [2, 3, 6, 8, 9, 10];

const NUM_STAGES:usize = 10;

/// A 10-stage shift register with configurable feedback and output taps.  Tap
/// positions are 1-based; the feedback bit enters at stage 1 and the register
/// shifts toward stage 10.
pub struct ShiftRegister {
	state: [bool; NUM_STAGES],
	feedback_taps: Vec<usize>,
	output_taps: Vec<usize>,
}

impl ShiftRegister {

	pub fn new(feedback_taps:&[usize], output_taps:&[usize]) -> Result<Self, CodeGenErr> {
		for tap in feedback_taps.iter().chain(output_taps.iter()) {
			if *tap < 1 || *tap > NUM_STAGES {
				return Err(CodeGenErr::InvalidConfiguration("tap position outside the range 1..=10"));
			}
		}
		if feedback_taps.is_empty() {
			return Err(CodeGenErr::InvalidConfiguration("no feedback taps configured"));
		}
		if output_taps.is_empty() {
			return Err(CodeGenErr::InvalidConfiguration("no output taps configured"));
		}

		Ok(Self{ state: [true; NUM_STAGES], feedback_taps: feedback_taps.to_vec(), output_taps: output_taps.to_vec() })
	}

	pub fn reinitialize(&mut self) {
		self.state = [true; NUM_STAGES];
	}

	pub fn state(&self) -> &[bool; NUM_STAGES] { &self.state }

	/// Advances the register one step and returns the output bit.  The output
	/// and feedback bits are both taken from the state before the shift.
	pub fn step(&mut self) -> bool {
		let output:bool = self.output_taps.iter().fold(false, |acc, tap| acc ^ self.state[tap-1]);
		let feedback:bool = self.feedback_taps.iter().fold(false, |acc, tap| acc ^ self.state[tap-1]);

		for i in (1..NUM_STAGES).rev() {
			self.state[i] = self.state[i-1];
		}
		self.state[0] = feedback;

		output
	}

}

/// Produces the 1023-chip C/A Gold code for one satellite by combining the G1
/// register with the satellite's delayed G2 register
pub struct GoldCodeGenerator {
	prn: usize,
	g1: ShiftRegister,
	g2: ShiftRegister,
}

impl GoldCodeGenerator {

	pub fn new(prn:usize) -> Result<Self, CodeGenErr> {
		if prn < 1 || prn > G2_OUTPUT_TAPS.len() {
			return Err(CodeGenErr::UnknownSatellite(prn));
		}

		let g1 = ShiftRegister::new(&G1_FEEDBACK_TAPS, &G1_OUTPUT_TAPS)?;
		let g2 = ShiftRegister::new(&G2_FEEDBACK_TAPS, &G2_OUTPUT_TAPS[prn-1])?;

		Ok(Self{ prn, g1, g2 })
	}

	pub fn prn(&self) -> usize { self.prn }

	/// Both registers start over from the all-ones state, so repeated calls
	/// produce identical sequences
	pub fn generate(&mut self) -> Vec<bool> {
		self.g1.reinitialize();
		self.g2.reinitialize();

		(0..CODE_LENGTH).map(|_| {
			let g1_out:bool = self.g1.step();
			let g2_out:bool = self.g2.step();
			g1_out ^ g2_out
		}).collect()
	}

	/// Raw G1 output sequence, mainly useful for diagnostics
	pub fn g1_sequence(&mut self) -> Vec<bool> {
		self.g1.reinitialize();
		let g1 = &mut self.g1;
		(0..CODE_LENGTH).map(|_| g1.step()).collect()
	}

	/// Raw delayed-G2 output sequence, mainly useful for diagnostics
	pub fn g2_sequence(&mut self) -> Vec<bool> {
		self.g2.reinitialize();
		let g2 = &mut self.g2;
		(0..CODE_LENGTH).map(|_| g2.step()).collect()
	}

}

pub fn ca_code(prn:usize) -> Result<Vec<bool>, CodeGenErr> {
	Ok(GoldCodeGenerator::new(prn)?.generate())
}
