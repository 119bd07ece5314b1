use super::QuestionSeed;

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "web-01",
        tag: "xss",
        text: "Cross-site scripting (XSS) allows an attacker to:",
        options: &[
            "Run script in a victim's browser in the context of a trusted site",
            "Read the server's file system directly",
            "Change DNS records",
            "Crack password hashes",
        ],
        correct: 0,
        explanation: "Injected script runs with the site's origin and can steal data or act as the user.",
    },
    QuestionSeed {
        id: "web-02",
        tag: "xss",
        text: "Stored XSS differs from reflected XSS because the payload:",
        options: &[
            "Only exists in the URL",
            "Runs on the server",
            "Requires a browser extension",
            "Is persisted on the server and served to other users",
        ],
        correct: 3,
        explanation: "Stored payloads hit every visitor who views the affected content.",
    },
    QuestionSeed {
        id: "web-03",
        tag: "xss",
        text: "DOM-based XSS occurs when:",
        options: &[
            "Cookies are too large",
            "CORS is misconfigured",
            "Client-side script writes attacker-controlled data into the page unsafely",
            "The server stores malicious HTML",
        ],
        correct: 2,
        explanation: "Sinks like innerHTML fed from location.hash never touch the server.",
    },
    QuestionSeed {
        id: "web-04",
        tag: "xss",
        text: "The primary defense against XSS is:",
        options: &[
            "Hashing all input",
            "Disabling cookies",
            "Context-aware output encoding",
            "Using POST instead of GET",
        ],
        correct: 2,
        explanation: "Encoding for the HTML, attribute, URL, or JS context prevents data from being parsed as code.",
    },
    QuestionSeed {
        id: "web-05",
        tag: "xss",
        text: "Which header restricts where scripts may be loaded from?",
        options: &[
            "Referrer-Policy",
            "Content-Security-Policy",
            "Access-Control-Allow-Origin",
            "Cache-Control",
        ],
        correct: 1,
        explanation: "A strict CSP blocks inline and third-party scripts that were not allowlisted.",
    },
    QuestionSeed {
        id: "web-06",
        tag: "cookies",
        text: "The HttpOnly cookie flag:",
        options: &[
            "Prevents JavaScript from reading the cookie",
            "Sends the cookie only over HTTP",
            "Encrypts the cookie",
            "Makes the cookie expire on close",
        ],
        correct: 0,
        explanation: "HttpOnly limits cookie theft through XSS.",
    },
    QuestionSeed {
        id: "web-07",
        tag: "cookies",
        text: "The Secure cookie flag ensures:",
        options: &[
            "The cookie is only sent over HTTPS",
            "The cookie cannot be modified",
            "The cookie is signed",
            "The cookie is shared across domains",
        ],
        correct: 0,
        explanation: "Secure cookies never travel over plaintext HTTP.",
    },
    QuestionSeed {
        id: "web-08",
        tag: "csrf",
        text: "CSRF tricks a victim's browser into:",
        options: &[
            "Running malicious script",
            "Revealing its IP address",
            "Downloading malware",
            "Sending authenticated requests the user did not intend",
        ],
        correct: 3,
        explanation: "The browser automatically attaches cookies to cross-site requests.",
    },
    QuestionSeed {
        id: "web-09",
        tag: "csrf",
        text: "Which is an effective CSRF defense?",
        options: &[
            "Long passwords",
            "Input length limits",
            "Unpredictable anti-CSRF tokens tied to the session",
            "Using HTTPS only",
        ],
        correct: 2,
        explanation: "A forged request cannot include the secret token.",
    },
    QuestionSeed {
        id: "web-10",
        tag: "csrf",
        text: "SameSite=Strict on a session cookie:",
        options: &[
            "Encrypts the cookie",
            "Disables the cookie on mobile",
            "Stops the cookie being sent on cross-site requests",
            "Shares the cookie with subdomains",
        ],
        correct: 2,
        explanation: "SameSite limits cross-site cookie attachment, mitigating CSRF.",
    },
    QuestionSeed {
        id: "web-11",
        tag: "injection",
        text: "The input ' OR '1'='1 is a classic test for:",
        options: &["Clickjacking", "SQL injection", "XSS", "SSRF"],
        correct: 1,
        explanation: "It turns a WHERE clause into an always-true condition.",
    },
    QuestionSeed {
        id: "web-12",
        tag: "injection",
        text: "Blind SQL injection is exploited by:",
        options: &[
            "Inferring data from true/false responses or timing",
            "Reading error messages only",
            "Uploading files",
            "Sniffing network traffic",
        ],
        correct: 0,
        explanation: "Without visible output, attackers ask yes/no questions of the database.",
    },
    QuestionSeed {
        id: "web-13",
        tag: "injection",
        text: "A web form that pings a host and accepts \"127.0.0.1; cat /etc/passwd\" is vulnerable to:",
        options: &["OS command injection", "CSRF", "Open redirect", "XXE"],
        correct: 0,
        explanation: "The semicolon terminates the ping command and starts another.",
    },
    QuestionSeed {
        id: "web-14",
        tag: "injection",
        text: "Server-side template injection can lead to:",
        options: &[
            "Only visual defacement",
            "Cookie expiry",
            "Faster page rendering",
            "Remote code execution on the server",
        ],
        correct: 3,
        explanation: "Template engines often expose powerful objects when user input is treated as a template.",
    },
    QuestionSeed {
        id: "web-15",
        tag: "access control",
        text: "Changing /invoice?id=1001 to id=1002 reveals another user's invoice. This is:",
        options: &[
            "Session fixation",
            "DNS rebinding",
            "Insecure direct object reference (IDOR)",
            "XSS",
        ],
        correct: 2,
        explanation: "The server fails to check that the object belongs to the requester.",
    },
    QuestionSeed {
        id: "web-16",
        tag: "access control",
        text: "Where must authorization checks be enforced?",
        options: &[
            "In JavaScript before submitting forms",
            "In the load balancer only",
            "On the server for every request",
            "Only in the UI by hiding buttons",
        ],
        correct: 2,
        explanation: "Client-side checks are advisory; attackers call APIs directly.",
    },
    QuestionSeed {
        id: "web-17",
        tag: "sessions",
        text: "Session fixation is prevented by:",
        options: &[
            "Storing sessions in cookies",
            "Issuing a new session ID after login",
            "Using longer passwords",
            "Disabling HTTPS",
        ],
        correct: 1,
        explanation: "Regenerating the ID invalidates any ID the attacker planted.",
    },
    QuestionSeed {
        id: "web-18",
        tag: "sessions",
        text: "Session tokens should be:",
        options: &[
            "Long, random, and unpredictable",
            "Sequential for easy debugging",
            "Derived from the username",
            "Included in URLs",
        ],
        correct: 0,
        explanation: "Predictable or leaked tokens allow session hijacking.",
    },
    QuestionSeed {
        id: "web-19",
        tag: "authentication",
        text: "Credential stuffing uses:",
        options: &[
            "Username/password pairs leaked from other breaches",
            "Random brute-force strings",
            "Phishing emails only",
            "Keyloggers",
        ],
        correct: 0,
        explanation: "Password reuse makes leaked credentials valid on other sites.",
    },
    QuestionSeed {
        id: "web-20",
        tag: "rate limiting",
        text: "Rate limiting login attempts mitigates:",
        options: &["XSS", "Clickjacking", "CORS errors", "Brute-force attacks"],
        correct: 3,
        explanation: "Throttling makes online password guessing impractical.",
    },
    QuestionSeed {
        id: "web-21",
        tag: "rate limiting",
        text: "A rate limiter keyed only on the X-Forwarded-For header can be bypassed by:",
        options: &[
            "Sending requests slowly",
            "Clearing cookies",
            "Spoofing a different header value on each request",
            "Using HTTPS",
        ],
        correct: 2,
        explanation: "Client-supplied headers are attacker-controlled unless set by a trusted proxy.",
    },
    QuestionSeed {
        id: "web-22",
        tag: "authentication",
        text: "Multi-factor authentication combines:",
        options: &[
            "A password and a username",
            "Two security questions",
            "Different categories of factors, such as something you know and something you have",
            "Two passwords",
        ],
        correct: 2,
        explanation: "Factors must be independent for MFA to add real protection.",
    },
    QuestionSeed {
        id: "web-23",
        tag: "clickjacking",
        text: "Clickjacking is mitigated by:",
        options: &[
            "Parameterized queries",
            "X-Frame-Options or CSP frame-ancestors",
            "HttpOnly cookies",
            "Input validation",
        ],
        correct: 1,
        explanation: "Preventing framing stops invisible overlays on the real page.",
    },
    QuestionSeed {
        id: "web-24",
        tag: "cors",
        text: "Access-Control-Allow-Origin: * combined with credentials:",
        options: &[
            "Is rejected by browsers",
            "Is the recommended configuration",
            "Enables CSRF protection",
            "Disables cookies",
        ],
        correct: 0,
        explanation: "Browsers refuse wildcard origins for credentialed requests.",
    },
    QuestionSeed {
        id: "web-25",
        tag: "cors",
        text: "Reflecting any Origin header into Access-Control-Allow-Origin with credentials allowed:",
        options: &[
            "Lets any site read authenticated responses",
            "Is safe with HTTPS",
            "Blocks all cross-origin requests",
            "Only affects images",
        ],
        correct: 0,
        explanation: "It effectively disables the same-origin policy for that API.",
    },
    QuestionSeed {
        id: "web-26",
        tag: "same-origin",
        text: "Two URLs share an origin when they have the same:",
        options: &["Host only", "Path and query", "IP address", "Scheme, host, and port"],
        correct: 3,
        explanation: "The origin tuple is scheme + host + port.",
    },
    QuestionSeed {
        id: "web-27",
        tag: "redirects",
        text: "An open redirect is commonly abused for:",
        options: &[
            "Denial of service",
            "Password hashing",
            "Phishing links that appear to point to a trusted domain",
            "SQL injection",
        ],
        correct: 2,
        explanation: "Users trust the initial domain before being bounced to the attacker.",
    },
    QuestionSeed {
        id: "web-28",
        tag: "uploads",
        text: "Which is the safest handling of user file uploads?",
        options: &[
            "Keep the original file name in the web root",
            "Allow any extension if the size is small",
            "Validate type, rename, and store outside the web root",
            "Trust the Content-Type header",
        ],
        correct: 2,
        explanation: "Uploaded scripts in the web root may be executed by the server.",
    },
    QuestionSeed {
        id: "web-29",
        tag: "ssrf",
        text: "In cloud environments, SSRF is especially dangerous because it can reach:",
        options: &[
            "Printer queues",
            "Instance metadata endpoints that expose credentials",
            "The user's browser history",
            "Client-side storage",
        ],
        correct: 1,
        explanation: "Metadata services like 169.254.169.254 can hand out temporary keys.",
    },
    QuestionSeed {
        id: "web-30",
        tag: "jwt",
        text: "Accepting JWTs with \"alg\": \"none\" allows:",
        options: &[
            "Forging tokens without a signature",
            "Stronger encryption",
            "Faster verification with no risk",
            "Automatic key rotation",
        ],
        correct: 0,
        explanation: "Verifiers must pin the expected algorithm.",
    },
    QuestionSeed {
        id: "web-31",
        tag: "jwt",
        text: "Data inside a standard signed JWT payload is:",
        options: &[
            "Readable by anyone holding the token",
            "Encrypted",
            "Hashed and unrecoverable",
            "Only readable by the server",
        ],
        correct: 0,
        explanation: "JWS payloads are only Base64URL-encoded; don't put secrets in them.",
    },
    QuestionSeed {
        id: "web-32",
        tag: "fingerprinting",
        text: "Browser fingerprinting identifies users by:",
        options: &[
            "Reading their cookies only",
            "Their IP address only",
            "Installing a certificate",
            "Combining attributes like fonts, screen size, and canvas rendering",
        ],
        correct: 3,
        explanation: "Many small signals together create a near-unique identifier without cookies.",
    },
    QuestionSeed {
        id: "web-33",
        tag: "fingerprinting",
        text: "Which technique resists browser fingerprinting?",
        options: &[
            "Using a longer password",
            "Disabling HTTPS",
            "Making many users present identical attributes",
            "Clearing cookies only",
        ],
        correct: 2,
        explanation: "Uniformity, as in Tor Browser, removes distinguishing signals.",
    },
    QuestionSeed {
        id: "web-34",
        tag: "headers",
        text: "X-Content-Type-Options: nosniff prevents:",
        options: &[
            "Compression",
            "Cookie theft",
            "Browsers from MIME-sniffing responses into executable types",
            "Caching",
        ],
        correct: 2,
        explanation: "Without it, a text upload might be interpreted as script.",
    },
    QuestionSeed {
        id: "web-35",
        tag: "headers",
        text: "Which Referrer-Policy value avoids leaking full URLs to other sites?",
        options: &[
            "origin-when-unsafe",
            "strict-origin-when-cross-origin",
            "unsafe-url",
            "no-referrer-when-downgrade",
        ],
        correct: 1,
        explanation: "Cross-origin requests then receive only the origin.",
    },
    QuestionSeed {
        id: "web-36",
        tag: "owasp",
        text: "The OWASP Top 10 is:",
        options: &[
            "An awareness document of the most critical web application risks",
            "A list of vulnerable websites",
            "A firewall product",
            "A programming language",
        ],
        correct: 0,
        explanation: "It is updated periodically from industry data.",
    },
    QuestionSeed {
        id: "web-37",
        tag: "owasp",
        text: "\"Broken Access Control\" in the OWASP Top 10 includes:",
        options: &[
            "Users acting outside their intended permissions",
            "Slow page loads",
            "Expired TLS certificates only",
            "Spelling errors",
        ],
        correct: 0,
        explanation: "IDOR, privilege escalation, and forced browsing fall under this category.",
    },
    QuestionSeed {
        id: "web-38",
        tag: "dependencies",
        text: "Using components with known vulnerabilities is best addressed by:",
        options: &[
            "Obfuscating JavaScript",
            "Adding CAPTCHAs",
            "Disabling logging",
            "Software composition analysis and timely updates",
        ],
        correct: 3,
        explanation: "Tracking dependency advisories lets teams patch before exploitation.",
    },
    QuestionSeed {
        id: "web-39",
        tag: "xss",
        text: "Which sink is dangerous when fed untrusted strings?",
        options: &["console.log", "Math.random", "element.innerHTML", "element.textContent"],
        correct: 2,
        explanation: "innerHTML parses markup; textContent treats input as text.",
    },
    QuestionSeed {
        id: "web-40",
        tag: "xss",
        text: "<img src=x onerror=alert(1)> demonstrates:",
        options: &[
            "A broken image only",
            "CSRF",
            "Script execution via an event handler attribute",
            "SQL injection",
        ],
        correct: 2,
        explanation: "Event handlers execute even when <script> tags are filtered.",
    },
    QuestionSeed {
        id: "web-41",
        tag: "api",
        text: "Mass assignment vulnerabilities occur when:",
        options: &[
            "Databases are replicated",
            "APIs bind all client fields, including ones like isAdmin, to models",
            "Too many users register",
            "Emails are sent in bulk",
        ],
        correct: 1,
        explanation: "Explicitly allowlist writable fields.",
    },
    QuestionSeed {
        id: "web-42",
        tag: "api",
        text: "GraphQL introspection enabled in production can:",
        options: &[
            "Reveal the full schema to attackers",
            "Speed up queries",
            "Encrypt responses",
            "Block injection",
        ],
        correct: 0,
        explanation: "Schema knowledge helps attackers find sensitive fields and mutations.",
    },
    QuestionSeed {
        id: "web-43",
        tag: "caching",
        text: "Web cache poisoning exploits:",
        options: &[
            "Unkeyed inputs that change a cached response served to others",
            "Browser history",
            "Slow DNS",
            "Large cookies",
        ],
        correct: 0,
        explanation: "A malicious response gets cached and delivered to every visitor.",
    },
    QuestionSeed {
        id: "web-44",
        tag: "http",
        text: "HTTP request smuggling arises from:",
        options: &[
            "Large file uploads",
            "Using HTTP/3",
            "Missing favicons",
            "Front-end and back-end servers disagreeing on request boundaries",
        ],
        correct: 3,
        explanation: "Conflicting Content-Length and Transfer-Encoding handling desynchronizes the chain.",
    },
    QuestionSeed {
        id: "web-45",
        tag: "passwords",
        text: "A password reset link should:",
        options: &[
            "Never expire",
            "Use the user ID as the token",
            "Contain a single-use, expiring, random token",
            "Include the user's current password",
        ],
        correct: 2,
        explanation: "Guessable or reusable tokens enable account takeover.",
    },
    QuestionSeed {
        id: "web-46",
        tag: "enumeration",
        text: "Different error messages for \"unknown user\" and \"wrong password\" enable:",
        options: &["SSRF", "Clickjacking", "Username enumeration", "XSS"],
        correct: 2,
        explanation: "Attackers learn which accounts exist and target them.",
    },
    QuestionSeed {
        id: "web-47",
        tag: "websockets",
        text: "WebSocket connections should validate:",
        options: &[
            "Nothing, they are secure by default",
            "The Origin header and authenticate the user",
            "Only the message length",
            "The client's screen size",
        ],
        correct: 1,
        explanation: "Cross-site WebSocket hijacking abuses missing origin checks.",
    },
    QuestionSeed {
        id: "web-48",
        tag: "storage",
        text: "Why avoid storing session tokens in localStorage?",
        options: &[
            "Any XSS can read localStorage",
            "localStorage is too small",
            "localStorage is cleared every request",
            "It is not supported by browsers",
        ],
        correct: 0,
        explanation: "HttpOnly cookies are not reachable from script.",
    },
    QuestionSeed {
        id: "web-49",
        tag: "subresource integrity",
        text: "Subresource Integrity (SRI) protects against:",
        options: &[
            "A compromised CDN serving modified scripts",
            "SQL injection",
            "Weak passwords",
            "Session fixation",
        ],
        correct: 0,
        explanation: "The browser refuses a script whose hash does not match the integrity attribute.",
    },
    QuestionSeed {
        id: "web-50",
        tag: "testing",
        text: "Which tool is an intercepting proxy widely used for web application testing?",
        options: &["Nessus", "Snort", "tcpdump", "Burp Suite"],
        correct: 3,
        explanation: "Burp lets testers inspect and modify requests between browser and server.",
    },
];
