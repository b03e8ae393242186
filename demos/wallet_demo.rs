use pegasus_core::{
    error::Result,
    Currency,
    Wallet,
};
use rust_decimal_macros::dec;

fn example() -> Result<(Wallet, Wallet, Currency)> {
    let usd = Currency::new("USD", 2)?;
    let krw = Currency::new("KRW", 0)?;

    let mut w1 = Wallet::new();
    let mut w2 = Wallet::new();

    w1.add_cash(&usd, dec!(0.01))?;
    w2.add_cash(&krw, dec!(1000))?;

    w1.remove_cash(&usd, dec!(1))?;
    w1.add_cash(&usd, dec!(10))?;

    // half a cent isn't a thing
    if let Err(e) = w1.add_cash(&usd, dec!(0.005)) {
        log::info!("expected failure: {}", e);
    }
    Ok((w1, w2, usd))
}

fn main() {
    env_logger::init();
    let (w1, w2, usd) = example().unwrap();
    println!("{}", w1.balance(&usd));
    println!("{}", w2.balance(&usd));
    println!("{}", w1);
}
