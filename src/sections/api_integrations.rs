use crate::document::Document;
use crate::errors::DocumentError;
use crate::sections::SectionContext;

const CRUD_EXAMPLE: &str = "
// Query orders
const { data, error } = await supabase
  .from('orders')
  .select('*')
  .eq('customer_id', userId)
  .order('created_at', { ascending: false })

// Insert new order
const { data, error } = await supabase
  .from('orders')
  .insert({
    customer_id: userId,
    event_type: 'wedding',
    package_name: 'premium',
    total_price: 500
  })

// Update order status
const { data, error } = await supabase
  .from('orders')
  .update({ status: 'completed' })
  .eq('id', orderId)

// Delete (soft delete preferred)
const { data, error } = await supabase
  .from('orders')
  .update({ deleted_at: new Date() })
  .eq('id', orderId)
";

const REALTIME_EXAMPLE: &str = "
// Subscribe to new orders
const subscription = supabase
  .channel('orders')
  .on('postgres_changes',
    {
      event: 'INSERT',
      schema: 'public',
      table: 'orders'
    },
    (payload) => {
      console.log('New order:', payload.new)
      // Update UI with new order
    }
  )
  .subscribe()
";

pub fn build(doc: &mut Document, _ctx: &SectionContext<'_>) -> Result<(), DocumentError> {
    doc.add_heading("API & INTEGRATIONS", 1)?;

    supabase(doc)?;
    paystack(doc)?;
    whatsapp(doc)?;
    gemini(doc)?;
    email(doc)?;

    doc.add_page_break();
    Ok(())
}

fn supabase(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Supabase API Usage", 2)?;
    doc.add_paragraph(
        "Supabase provides auto-generated RESTful API and real-time subscriptions for all \
         database tables. The frontend communicates with Supabase using the official \
         JavaScript client library.",
    );

    doc.add_heading("Authentication API", 3)?;
    doc.add_labeled_list(&[
        ("signUp()", "Create new user account with email/password"),
        ("signIn()", "Authenticate user and receive session token"),
        ("signOut()", "End user session"),
        ("resetPassword()", "Send password reset email"),
        ("updateUser()", "Update user profile information"),
        ("getSession()", "Retrieve current session information"),
        ("onAuthStateChange()", "Subscribe to authentication state changes"),
    ]);

    doc.add_heading("Database API", 3)?;
    doc.add_paragraph("CRUD operations via Supabase client:");
    doc.add_code_block(CRUD_EXAMPLE);

    doc.add_heading("Real-time Subscriptions", 3)?;
    doc.add_paragraph("Subscribe to database changes for real-time updates:");
    doc.add_code_block(REALTIME_EXAMPLE);

    doc.add_heading("Storage API", 3)?;
    doc.add_labeled_list(&[
        ("upload()", "Upload files to Supabase Storage buckets"),
        ("download()", "Download files from storage"),
        ("createSignedUrl()", "Generate temporary URL for private files"),
        ("list()", "List files in a bucket"),
        ("remove()", "Delete files from storage"),
        ("getPublicUrl()", "Get public URL for public bucket files"),
    ]);

    Ok(())
}

fn paystack(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Paystack Payment Integration", 2)?;
    doc.add_paragraph(
        "Paystack is integrated for payment processing with support for multiple payment \
         methods popular in Ghana.",
    );

    doc.add_heading("Payment Flow", 3)?;
    doc.add_bullets(&[
        "1. Customer completes order form",
        "2. Frontend initiates payment with Paystack",
        "3. Paystack popup opens with payment options",
        "4. Customer selects payment method (card/mobile money)",
        "5. Customer completes payment on Paystack",
        "6. Paystack sends webhook to backend",
        "7. Backend verifies payment with Paystack API",
        "8. Order status updated to \"Paid\"",
        "9. Customer receives confirmation email",
        "10. Admin receives new order notification",
    ]);

    doc.add_heading("Paystack API Endpoints", 3)?;
    doc.add_labeled_list(&[
        ("Initialize Transaction", "POST /transaction/initialize - Create payment session"),
        ("Verify Transaction", "GET /transaction/verify/:reference - Confirm payment"),
        ("List Transactions", "GET /transaction - Retrieve transaction history"),
        ("Refund Transaction", "POST /refund - Process refund"),
        ("Mobile Money", "POST /charge - Charge mobile money accounts"),
    ]);

    doc.add_heading("Payment Methods Supported", 3)?;
    doc.add_bullets(&[
        "Visa/Mastercard credit and debit cards",
        "MTN Mobile Money",
        "Vodafone Cash",
        "AirtelTigo Money",
        "Bank transfer",
        "USSD",
    ]);

    Ok(())
}

fn whatsapp(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("WhatsApp Integration", 2)?;
    doc.add_paragraph(
        "WhatsApp Business API integration enables direct delivery of invitations and \
         notifications to customers.",
    );

    doc.add_heading("WhatsApp Features", 3)?;
    doc.add_bullets(&[
        "Send invitation links directly to customer WhatsApp",
        "Order status notifications",
        "Payment confirmations",
        "Design ready notifications",
        "Support message delivery",
        "Bulk WhatsApp messaging for campaigns",
        "Message templates for compliance",
        "Delivery status tracking",
    ]);

    doc.add_heading("Implementation", 3)?;
    doc.add_paragraph(
        "WhatsApp integration uses the WhatsApp Business API with message templates \
         approved by Meta. Messages are sent via Supabase Edge Functions to maintain \
         security and comply with WhatsApp policies.",
    );

    Ok(())
}

fn gemini(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Google Gemini AI Integration", 2)?;
    doc.add_paragraph("Google Gemini AI powers the intelligent chatbot providing 24/7 customer support.");

    doc.add_heading("Chatbot Capabilities", 3)?;
    doc.add_bullets(&[
        "Answer frequently asked questions",
        "Explain pricing and packages",
        "Guide users through ordering process",
        "Check order status",
        "Provide design recommendations",
        "Troubleshoot common issues",
        "Escalate to human support when needed",
        "Multi-turn conversations with context",
        "Natural language understanding",
        "Response in English and local languages",
    ]);

    doc.add_heading("Implementation", 3)?;
    doc.add_paragraph(
        "The chatbot is implemented as a floating widget (ChatWidget.tsx) that appears on \
         all pages. It communicates with Google Gemini AI via Supabase Edge Functions \
         to protect API keys.",
    );
    doc.add_bullets(&[
        "1. User types message in chat widget",
        "2. Frontend sends message to Supabase Edge Function",
        "3. Edge Function calls Gemini AI API with message and context",
        "4. Gemini AI processes message and generates response",
        "5. Response sent back to Edge Function",
        "6. Edge Function returns response to frontend",
        "7. Chat widget displays response to user",
        "8. Conversation history maintained for context",
    ]);

    Ok(())
}

fn email(doc: &mut Document) -> Result<(), DocumentError> {
    doc.add_heading("Email Services", 2)?;
    doc.add_paragraph("Email notifications are sent for various events throughout the customer journey.");

    doc.add_heading("Email Types", 3)?;
    doc.add_labeled_list(&[
        ("Welcome Email", "Sent when customer creates account"),
        ("Order Confirmation", "Sent after successful order placement"),
        ("Payment Confirmation", "Sent after successful payment"),
        ("Order Status Update", "Sent when order status changes"),
        ("Design Ready", "Sent when design is ready for review"),
        ("Order Completed", "Sent when order is finalized"),
        ("Abandoned Cart", "Reminder for incomplete orders"),
        ("Password Reset", "Password reset link"),
        ("Invoice", "Order invoice attached"),
        ("Referral Notifications", "Referral commission updates"),
    ]);

    doc.add_heading("Email Templates", 3)?;
    doc.add_paragraph(
        "Email templates are stored in the database and support dynamic content insertion. \
         Templates are designed to be mobile-responsive with consistent branding.",
    );

    doc.add_heading("Sending Method", 3)?;
    doc.add_paragraph(
        "Emails are sent via Supabase Edge Functions using SMTP or a transactional email \
         service like SendGrid or Mailgun.",
    );

    Ok(())
}
