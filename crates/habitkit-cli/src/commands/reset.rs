use habitkit_core::Database;

pub fn run(all_marks: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !all_marks {
        return Err("pass --all-marks to remove every checkmark from every habit".into());
    }
    let db = Database::open()?;
    let removed = db.clear_all_marks()?;
    println!("removed {removed} checkmarks");
    Ok(())
}
