use extsync_sync::config::EXTENSIONS_FILE;
use extsync_sync::ConfigDocument;

/// Short usage, printed when no command is given.
pub(crate) fn print_usage() {
    println!("Editor Extensions Sync Tool");
    println!("\nUsage:");
    println!("  extsync export    - Export current setup");
    println!("  extsync import    - Import and apply setup");
    println!("  extsync status    - Show current status");
    println!("  extsync help      - Show this help");
}

pub(crate) fn handle_help_command() {
    println!("Editor Extensions Sync Tool");
    println!(
        "\nThis tool helps you sync editor extensions and settings across different installations."
    );
    println!("\nCommands:");
    println!("  export  - Export your current editor setup (extensions, settings, keybindings)");
    println!("  import  - Import and apply a previously exported setup");
    println!("  status  - Show the current status of your editor installation");
    println!("  help    - Show this help message");
    println!("\nFiles managed:");
    println!("  {:<17}- List of extension IDs", EXTENSIONS_FILE);
    println!(
        "  {:<17}- Editor settings",
        ConfigDocument::Settings.file_name()
    );
    println!(
        "  {:<17}- Editor keybindings",
        ConfigDocument::Keybindings.file_name()
    );
}
