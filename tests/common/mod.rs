use rand::seq::SliceRandom;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const PROVIDERS: [&str; 2] = ["paypal", "razorpay"];

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["amount", "paymentType", "sender", "receiver"])?;

    let mut rng = rand::thread_rng();
    for i in 1..=rows {
        let provider = *PROVIDERS.choose(&mut rng).unwrap();
        let amount = format!("{i}.00");
        let sender = format!("sender-{i}");
        let receiver = format!("receiver-{i}");
        wtr.write_record([amount.as_str(), provider, sender.as_str(), receiver.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn generate_large_csv(path: &Path, size_mb: usize) -> Result<usize, Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["amount", "paymentType", "sender", "receiver"])?;

    let target_size = (size_mb * 1024 * 1024) as u64;
    let mut rng = rand::thread_rng();
    let mut rows = 0;

    // Check size every 5000 rows to avoid syscall overhead
    loop {
        for _ in 0..5000 {
            rows += 1;
            let provider = *PROVIDERS.choose(&mut rng).unwrap();
            let amount = format!("{}.00", rows % 1000);
            let sender = format!("sender-{}", rows % 50);
            let receiver = format!("receiver-{}", rows % 50);
            wtr.write_record([amount.as_str(), provider, sender.as_str(), receiver.as_str()])?;
        }
        wtr.flush()?; // Flush to ensure file size is updated
        if std::fs::metadata(path)?.len() >= target_size {
            break;
        }
    }
    Ok(rows)
}
