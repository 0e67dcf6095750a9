use anyhow::Result;
use calshare_core::TzdbProvider;

pub fn run(filter: Option<&str>) -> Result<()> {
    let filter = filter.map(str::to_lowercase);

    for name in TzdbProvider::zone_names() {
        if let Some(needle) = &filter {
            if !name.to_lowercase().contains(needle) {
                continue;
            }
        }
        println!("{}", name);
    }

    Ok(())
}
