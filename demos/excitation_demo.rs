//! Runs the excitation integrator, replays its series and pushes a message
//! through the transduction pipeline

use qlife::{LifeError, Transducer};

fn main() -> Result<(), LifeError> {
    env_logger::init();

    let mut transducer = Transducer::new();
    let report = transducer.start("HELLO WORLD", 1_718_000_000_000)?;
    for step in 0..=10 {
        let progress = step as f64 / 10.0;
        if let Some(s) = report.visible(progress).last() {
            println!("{:>4.0}%  t = {:>5.2}  |ψ0| = {:.4}  |ψ1| = {:.4}", progress * 100.0, s.t, s.psi0, s.psi1);
        }
    }
    println!("{}", transducer.metrics());

    println!("packet: {}", transducer.ionize()?);
    let key = transducer.transduce()?.to_string();
    println!("morse:  {}", transducer.morse());
    println!("binary: {}", transducer.binary());
    println!("key:    {}", key);
    transducer.complete()?;
    println!("status: {}", transducer.status());
    Ok(())
}
