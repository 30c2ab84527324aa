use anyhow::Result;

use std::io::stdin;

use connect4_match::ticket::is_lucky;

fn main() -> Result<()> {
    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;

    let verdict = if is_lucky(buffer.trim_end())? {
        "Lucky"
    } else {
        "Regular"
    };
    print!("{}", verdict);
    Ok(())
}
