
extern crate clap;
extern crate colored;
extern crate serde;
extern crate serde_json;

use clap::{Arg, App};
use colored::*;
use serde::{Serialize, Deserialize};

use gold_codes::gps_l1_ca::signal_modulation::GoldCodeGenerator;
use gold_codes::utils::bools_to_int;

#[derive(Debug, Serialize, Deserialize)]
struct CodeRecord {
	pub prn:usize,
	pub chips:Vec<u8>,
	pub first_10_chips_octal:String,
}

fn main() {

	let matches = App::new("GPS L1 CA Code Generator")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Produces the 1023-chip L1 C/A spreading code for one or all GPS satellites")
		.arg(Arg::with_name("prn")
			.short("p").long("prn")
			.help("Satellite PRN number (1 to 32); all satellites if omitted")
			.takes_value(true))
		.arg(Arg::with_name("format")
			.short("f").long("format")
			.takes_value(true)
			.possible_value("bits").possible_value("hex").possible_value("json"))
		.get_matches();

	let prns:Vec<usize> = match matches.value_of("prn") {
		Some(s) => vec![s.parse().unwrap()],
		None    => (1..=32).collect(),
	};
	let format:&str = matches.value_of("format").unwrap_or("bits");

	for prn in prns {

		let mut generator = match GoldCodeGenerator::new(prn) {
			Ok(g)  => g,
			Err(e) => {
				eprintln!("{}", format!("PRN {:02}: {:?}", prn, e).red());
				continue;
			},
		};

		let code:Vec<bool> = generator.generate();
		let octal:String = format!("{:04o}", bools_to_int::to_u16(&code[..10]).unwrap());

		match format {
			"json" => {
				let record = CodeRecord{
					prn,
					chips: code.iter().map(|chip| if *chip { 1u8 } else { 0u8 }).collect(),
					first_10_chips_octal: octal.clone(),
				};
				println!("{}", serde_json::to_string(&record).unwrap());
			},
			"hex" => {
				let hex:String = bools_to_int::to_byte_vec(&code).iter().map(|b| format!("{:02x}", b)).collect();
				println!("PRN {:02}: {}", prn, hex);
			},
			_ => {
				println!("PRN {:02}: {}", prn, bools_to_int::to_bit_string(&code));
			},
		}

		eprintln!("{}", format!("PRN {:02}, first 10 chips {} (octal)", prn, octal).green());

	}

}
