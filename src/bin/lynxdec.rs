//! Command-line harness around the decryption engine.
//!
//! With no arguments, decrypts the bundled encrypted loader and reports
//! `LynxDecrypt works` or `LynxDecrypt fails`. With the `modexp`
//! subcommand, reads base, exponent and modulus as three hex lines from
//! stdin and prints `base^exponent mod modulus` in the same format.

use std::io::{self, BufRead};
use std::process::ExitCode;

use log::{info, warn};

use lynx_rsa::keys::{ENCRYPTED_LOADER, PLAINTEXT_LOADER};
use lynx_rsa::{hex, lynx_decrypt, mod_exp};

fn main() -> ExitCode {
    env_logger::init();

    match std::env::args().nth(1).as_deref() {
        None => self_test(),
        Some("modexp") => modexp_from_stdin(),
        Some(other) => {
            eprintln!("usage: lynxdec [modexp]  (unknown mode {other:?})");
            ExitCode::from(2)
        }
    }
}

/// Decrypts the known image and compares against the known plaintext.
fn self_test() -> ExitCode {
    let (image, status) = lynx_decrypt(&ENCRYPTED_LOADER);
    info!("decode status: {status:?}");
    if status.is_ok() && image == PLAINTEXT_LOADER {
        println!("LynxDecrypt works");
        ExitCode::SUCCESS
    } else {
        println!("LynxDecrypt fails");
        ExitCode::FAILURE
    }
}

/// Reads three hex operands (base, exponent, modulus) and prints the power.
fn modexp_from_stdin() -> ExitCode {
    let stdin = io::stdin();
    let mut operands = Vec::with_capacity(3);
    for (line, name) in stdin.lock().lines().zip(["base", "exponent", "modulus"]) {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("reading {name}: {err}");
                return ExitCode::FAILURE;
            }
        };
        match hex::parse_operand(&line) {
            Ok(operand) => operands.push(operand),
            Err(err) => {
                eprintln!("bad {name}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    let [base, exponent, modulus] = &operands[..] else {
        eprintln!("expected three operand lines");
        return ExitCode::FAILURE;
    };
    if modulus[0] >= 0x80 {
        warn!("modulus top bit is set; the engine requires it clear");
        eprintln!("modulus out of range (top bit must be clear)");
        return ExitCode::FAILURE;
    }

    println!("{}", hex::format_operand(&mod_exp(base, exponent, modulus)));
    ExitCode::SUCCESS
}
