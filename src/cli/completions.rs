use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    jpgopt-setup completions bash > ~/.bash_completion.d/jpgopt-setup\n\n\
                  Generate zsh completions:\n    jpgopt-setup completions zsh > ~/.zfunc/_jpgopt-setup\n\n\
                  Generate fish completions:\n    jpgopt-setup completions fish > ~/.config/fish/completions/jpgopt-setup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
