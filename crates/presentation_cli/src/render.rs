//! Text rendering of the form
//!
//! Produces the full screen for a [`FormSnapshot`]; the session prints it
//! after every event.

use std::fmt::Write;

use application::FormSnapshot;
use domain::{AddressCandidate, FieldPhase, FieldRole, FieldState, Provider};

/// The instructional notice shown after a refused generation
pub const USAGE_NOTICE: &str = "⚠️  Como usar:\n   \
    1. Digite o endereço completo com número.\n   \
    2. Clique no endereço correto na lista que aparecer.\n   \
    3. Repita para origem e destino, e então gere o link!";

/// Line commands accepted by the interactive session
pub const COMMAND_HELP: &str = "Comandos:\n  \
    o|origem <texto>        digita na origem\n  \
    d|destino <texto>       digita no destino\n  \
    escolher <campo> <n>    escolhe o n-ésimo endereço da lista\n  \
    enter <campo>           confirma o primeiro endereço da lista\n  \
    limpar <campo>          limpa o campo\n  \
    app <99|uber>           troca o aplicativo\n  \
    gerar                   gera o link\n  \
    copiar                  copia o link\n  \
    whatsapp                envia o link no WhatsApp\n  \
    ajuda                   mostra esta ajuda\n  \
    sair                    encerra";

const fn label(role: FieldRole) -> &'static str {
    match role {
        FieldRole::Origin => "📍 Origem (De onde vai sair)",
        FieldRole::Destination => "🎯 Destino (Para onde vai)",
    }
}

/// Field name as typed in line commands
const fn command_name(role: FieldRole) -> &'static str {
    match role {
        FieldRole::Origin => "origem",
        FieldRole::Destination => "destino",
    }
}

const fn placeholder(role: FieldRole) -> &'static str {
    match role {
        FieldRole::Origin => "Ex: Rua Tiradentes, Jabaquara, Santos",
        FieldRole::Destination => "Ex: Rua Princesa Isabel, Vila Belmiro, Santos",
    }
}

/// Label of the generate action
pub fn generate_label(snapshot: &FormSnapshot) -> &'static str {
    if !snapshot.can_generate() {
        return "Selecione origem e destino";
    }
    match snapshot.provider {
        Provider::NinetyNine => "Gerar Link do 99 ✨",
        Provider::Uber => "Gerar Link do Uber 🚙",
    }
}

/// One numbered list entry: title on the first line, area and city below
pub fn candidate_entry(position: usize, candidate: &AddressCandidate) -> String {
    let subtitle = candidate.subtitle();
    if subtitle.is_empty() {
        format!("{position}. {}", candidate.title())
    } else {
        format!("{position}. {}\n      {subtitle}", candidate.title())
    }
}

fn provider_toggle(active: Provider) -> String {
    Provider::ALL
        .iter()
        .map(|p| {
            if *p == active {
                format!("[{}]", p.display_name())
            } else {
                format!(" {} ", p.display_name())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_field(out: &mut String, field: &FieldState) {
    let _ = writeln!(out, "{}", label(field.role()));
    if field.text().is_empty() {
        let _ = writeln!(out, "   > ({})", placeholder(field.role()));
    } else {
        let _ = writeln!(out, "   > {}", field.text());
    }

    match field.phase() {
        FieldPhase::Searching => {
            let _ = writeln!(out, "   ⏳ Buscando endereços...");
        },
        FieldPhase::ResultsShown(candidates) => {
            let _ = writeln!(out, "   👇 Clique em um endereço ou pressione Enter:");
            for (i, candidate) in candidates.iter().enumerate() {
                let _ = writeln!(out, "   {}", candidate_entry(i + 1, candidate));
            }
        },
        FieldPhase::Confirmed(candidate) => {
            let _ = writeln!(out, "   ✅ {}", candidate.display_name);
            let _ = writeln!(out, "   ✖ limpar {}", command_name(field.role()));
        },
        FieldPhase::Empty | FieldPhase::Typing | FieldPhase::NoResults => {},
    }
}

/// Render the whole form, with an optional one-off notice at the bottom
pub fn render(snapshot: &FormSnapshot, notice: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str("🚗 Gerador de Links\n");
    out.push_str("Crie links de corrida para 99 e Uber\n\n");
    let _ = writeln!(out, "Aplicativo: {}\n", provider_toggle(snapshot.provider));

    if snapshot.help_visible() {
        let _ = writeln!(out, "{USAGE_NOTICE}\n");
    }

    render_field(&mut out, &snapshot.origin);
    out.push('\n');
    render_field(&mut out, &snapshot.destination);
    out.push('\n');

    let _ = writeln!(out, "[ {} ]", generate_label(snapshot));

    if let Some(link) = &snapshot.generated_link {
        out.push_str("\n✅ Link criado com sucesso!\n");
        let _ = writeln!(out, "{link}");
        let copy = if snapshot.copied {
            "✓ Copiado!"
        } else {
            "Copiar Link"
        };
        let _ = writeln!(out, "[ {copy} ]  [ Enviar no WhatsApp ]");
    }

    if let Some(notice) = notice {
        let _ = writeln!(out, "\n{notice}");
    }

    out
}
