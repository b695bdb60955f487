use std::collections::BTreeSet;
use std::fmt::Write;

use crate::{OperationCode, Options};

/**
Writes a TypeScript module with one request function per operation.

The module expects a runtime module exporting `request`, `getConfigs`,
`RequestConfig` and `RequestOptions`, and a models module exporting every class
listed in the operations' imports.
*/
pub(crate) fn write_to_string(
    operations: &[OperationCode],
    base_path: &str,
    options: &Options,
) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "/* eslint-disable */")?;
    writeln!(out, "// generated by tsgenitor, do not edit")?;

    let imports: BTreeSet<&str> = operations
        .iter()
        .flat_map(|op| op.parameters.imports.iter().map(String::as_str))
        .collect();
    if !imports.is_empty() {
        let imports = imports.into_iter().collect::<Vec<_>>().join(", ");
        writeln!(out, "import {{ {imports} }} from '{}';", options.models_module)?;
    }
    writeln!(
        out,
        "import {{ request, getConfigs, RequestConfig, RequestOptions }} from '{}';",
        options.runtime_module
    )?;
    writeln!(out)?;
    writeln!(out, "export const basePath = '{base_path}';")?;

    for op in operations {
        writeln!(out)?;
        write_operation(&mut out, op)?;
    }

    Ok(out)
}

fn write_operation(out: &mut String, op: &OperationCode) -> std::fmt::Result {
    let p = &op.parameters;

    writeln!(out, "/**")?;
    for line in op.doc.lines() {
        writeln!(out, " * {}", line.replace("*/", "*\\/"))?;
    }
    writeln!(out, " */")?;
    writeln!(
        out,
        "export function {}(params: {{{}\n  }} = {{}} as any, options: RequestOptions = {{}}): Promise<any> {{",
        op.fn_name, p.request_parameters
    )?;
    writeln!(out, "  let url = basePath + '{}';", op.path)?;
    for line in p.request_path_replace.lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(
        out,
        "  const configs: RequestConfig = getConfigs('{}', '{}', url, options);",
        op.method.as_str().to_lowercase(),
        op.content_type
    )?;
    if !p.query_parameters.is_empty() {
        writeln!(out, "  configs.params = {{{}}};", p.query_parameters.join(","))?;
    }
    if !p.header_parameters.is_empty() {
        writeln!(
            out,
            "  configs.headers = {{...configs.headers, {}}};",
            p.header_parameters.join(",")
        )?;
    }
    if p.has_form_data() {
        writeln!(out, "  let data = new FormData();")?;
        for line in p.request_form_data.lines() {
            writeln!(out, "  {line}")?;
        }
        writeln!(out, "  configs.data = data;")?;
    } else if p.has_body() {
        writeln!(out, "  configs.data = {};", p.body_parameter)?;
    }
    writeln!(out, "  return request(configs);")?;
    writeln!(out, "}}")
}
