/// Suggested file name for the downloadable template.
pub const TEMPLATE_FILE_NAME: &str = "template_importacao.csv";

/// Example import file offered to users. The header must stay byte-compatible
/// with the aliases `parser::field_for_header` accepts; a test guards that the
/// template always parses with every row valid.
pub const TEMPLATE_CSV: &str = "\
data,nome do procedimento,nome dos medicos,nome do paciente
2024-12-01,Consulta,Dr. João Silva,Maria Santos
2024-12-02,Exame,Dra. Ana Paula,José Oliveira";
